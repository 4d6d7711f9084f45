pub mod graveyard;
pub mod lamppost;
pub mod plant_patch;
pub mod pumpkin_patch;
pub mod webs;
