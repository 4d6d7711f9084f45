pub mod chunk_pos {
    use gloam_util::math::vector2::Vector2;

    pub const fn start_block_x(x: i32) -> i32 {
        x << 4
    }

    pub const fn end_block_x(x: i32) -> i32 {
        start_block_x(x) + 15
    }

    pub const fn start_block_z(z: i32) -> i32 {
        z << 4
    }

    pub const fn end_block_z(z: i32) -> i32 {
        start_block_z(z) + 15
    }

    pub const fn get_offset_x(chunk: &Vector2<i32>, offset: i32) -> i32 {
        start_block_x(chunk.x) + offset
    }

    pub const fn get_offset_z(chunk: &Vector2<i32>, offset: i32) -> i32 {
        start_block_z(chunk.y) + offset
    }
}

#[cfg(test)]
mod test {
    use gloam_util::math::vector2::Vector2;

    use super::chunk_pos;

    #[test]
    fn chunk_block_ranges() {
        assert_eq!(chunk_pos::start_block_x(-1), -16);
        assert_eq!(chunk_pos::end_block_x(-1), -1);
        assert_eq!(chunk_pos::start_block_z(2), 32);
        assert_eq!(chunk_pos::end_block_z(2), 47);
        let chunk = Vector2::new(-1, 3);
        assert_eq!(chunk_pos::get_offset_x(&chunk, 8), -8);
        assert_eq!(chunk_pos::get_offset_z(&chunk, 8), 56);
    }
}
