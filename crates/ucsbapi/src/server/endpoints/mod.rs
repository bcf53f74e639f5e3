pub mod resources;
pub mod status;
