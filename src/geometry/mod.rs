pub mod curve;
pub mod entity;
pub mod point;
pub mod quaternion;
pub mod surface;
pub mod triangle;
pub mod vector;

pub use curve::{Curve, Line};
pub use entity::Entity;
pub use point::Point;
pub use quaternion::Quaternion;
pub use surface::{Plane, Surface};
pub use triangle::Triangle;
pub use vector::Vector;

use crate::math::Vector4;

/// Conversion between a 3D value and homogeneous coordinates.
///
/// Free vectors map to `w = 0` and are unaffected by translation; points map
/// to `w = 1`.
pub trait Homogeneous: Sized {
    /// Lifts the value into homogeneous coordinates.
    fn to_homogeneous(&self) -> Vector4;

    /// Drops a homogeneous 4-vector back to the 3D value.
    fn from_homogeneous(v: &Vector4) -> Self;
}

/// Closed parameter interval `[start, end]`. Either bound may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub start: f64,
    pub end: f64,
}

impl ParameterRange {
    /// The whole real line.
    pub const UNBOUNDED: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `t` lies in the range, bounds included.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// Returns `true` if both bounds are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}
