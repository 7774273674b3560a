pub mod intersect_3d;

/// 3D column vector.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Homogeneous 4-component vector.
pub type Vector4 = nalgebra::Vector4<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Every "on the line", "on the plane", "perpendicular" and "zero denominator"
/// decision in the kernel reads this value.
pub const TOLERANCE: f64 = 1e-9;

/// Converts an angle in degrees to radians.
#[must_use]
pub fn to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.0
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn to_degree(radian: f64) -> f64 {
    radian * 180.0 / std::f64::consts::PI
}
