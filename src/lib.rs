pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod report;

pub use error::{CoilError, Result};
pub use geometry::{SpiralParameters, SpiralPath};
pub use operations::generate;
