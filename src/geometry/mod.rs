pub mod spiral_params;
pub mod spiral_path;

pub use spiral_params::{SpiralParameters, DEFAULT_STITCH_LENGTH};
pub use spiral_path::SpiralPath;
