use gloam_util::math::position::BlockPos;

use crate::{block::material::Material, world::GenerationWorld};

/// Natural terrain a structure may be built over.
const MATERIAL_WHITELIST: [Material; 6] = [
    Material::Ground,
    Material::Grass,
    Material::Leaves,
    Material::Wood,
    Material::Plants,
    Material::Rock,
];

pub fn is_permitted(material: Material) -> bool {
    material.is_replaceable() || material.is_liquid() || MATERIAL_WHITELIST.contains(&material)
}

/// The first block in `min..max` (max exclusive) that may not be built over.
pub fn find_obstruction<W: GenerationWorld + ?Sized>(
    world: &W,
    min: BlockPos,
    max: BlockPos,
) -> Option<BlockPos> {
    for y in min.0.y..max.0.y {
        for z in min.0.z..max.0.z {
            for x in min.0.x..max.0.x {
                let pos = BlockPos::new(x, y, z);
                if !is_permitted(world.get_block_state(&pos).material()) {
                    return Some(pos);
                }
            }
        }
    }
    None
}

pub fn is_clear<W: GenerationWorld + ?Sized>(world: &W, min: BlockPos, max: BlockPos) -> bool {
    find_obstruction(world, min, max).is_none()
}

#[cfg(test)]
mod test {
    use gloam_util::math::{position::BlockPos, vector3::Vector3};

    use super::{find_obstruction, is_clear, is_permitted};
    use crate::{
        ProtoRegion,
        block::{Block, BlockState, material::Material},
        world::{BlockFlags, GenerationWorld},
    };

    fn region() -> ProtoRegion {
        ProtoRegion::new(0, BlockPos::new(0, 0, 0), Vector3::new(8, 8, 8))
    }

    #[test]
    fn air_is_clear() {
        let region = region();
        assert!(is_clear(&region, BlockPos::new(0, 0, 0), BlockPos::new(8, 8, 8)));
    }

    #[test]
    fn natural_terrain_is_clear() {
        let mut region = region();
        let natural = [
            Block::STONE,
            Block::DIRT,
            Block::GRASS_BLOCK,
            Block::OAK_LOG,
            Block::OAK_LEAVES,
            Block::MUSHGLOOM,
            Block::TALL_GRASS,
            Block::WATER,
        ];
        for (x, block) in natural.into_iter().enumerate() {
            region.set_block_state(
                &BlockPos::new(x as i32, 1, 1),
                BlockState::new(block),
                BlockFlags::NOTIFY_ALL,
            );
        }
        assert!(is_clear(&region, BlockPos::new(0, 0, 0), BlockPos::new(8, 8, 8)));
    }

    #[test]
    fn foreign_solid_obstructs() {
        let mut region = region();
        let pos = BlockPos::new(3, 2, 4);
        region.set_block_state(&pos, BlockState::new(Block::GLASS), BlockFlags::NOTIFY_ALL);
        assert_eq!(
            find_obstruction(&region, BlockPos::new(0, 0, 0), BlockPos::new(8, 8, 8)),
            Some(pos)
        );
    }

    #[test]
    fn max_corner_is_exclusive() {
        let mut region = region();
        region.set_block_state(
            &BlockPos::new(4, 4, 4),
            BlockState::new(Block::COBWEB),
            BlockFlags::NOTIFY_ALL,
        );
        assert!(is_clear(&region, BlockPos::new(0, 0, 0), BlockPos::new(4, 4, 4)));
        assert!(!is_clear(&region, BlockPos::new(0, 0, 0), BlockPos::new(5, 5, 5)));
    }

    #[test]
    fn sand_and_gourds_are_not_whitelisted() {
        assert!(!is_permitted(Material::Sand));
        assert!(!is_permitted(Material::Gourd));
        assert!(is_permitted(Material::Lava));
    }
}
