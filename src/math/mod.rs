pub mod chord_2d;
pub mod range_map;

pub use chord_2d::chord_angle;
pub use range_map::map_range;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
