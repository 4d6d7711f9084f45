pub mod block_box;
pub mod orientation;
pub mod position;
pub mod vector2;
pub mod vector3;
