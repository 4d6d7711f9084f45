pub mod feature;
pub mod positions;
pub mod proto_region;
pub mod structure;
