pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for geometric degeneracy checks (zero-length directions,
/// near-parallel denominators).
pub const DEGENERACY_TOLERANCE: f64 = 1e-9;

/// Tolerance for parameter-range inclusion on bounded segments.
///
/// Looser than [`DEGENERACY_TOLERANCE`]: a tighter bound opens gaps where
/// two wall segments meet at a shared endpoint, a looser one leaks light
/// through touching joints.
pub const PARAM_TOLERANCE: f64 = 1e-6;
