pub mod model;
pub mod overlays;
pub mod patch;
