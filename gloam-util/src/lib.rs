pub mod direction;
pub mod math;
pub mod random;
pub mod resource_location;
pub mod world_seed;

pub use direction::HorizontalFacing;
