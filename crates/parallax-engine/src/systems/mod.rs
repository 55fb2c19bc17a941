pub mod lighting;
pub mod orbit;
pub mod render;
