pub mod biome;
pub mod block;
pub mod entity;
pub mod generation;
pub mod loot;
pub mod world;

pub use generation::proto_region::ProtoRegion;
pub use world::{BlockFlags, GenerationWorld};
