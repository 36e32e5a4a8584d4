pub mod render;
pub mod stats;
