use std::fmt;
use std::ops::{Add, Sub};

use tracing::debug;

use crate::math::Vector4;

use super::{Homogeneous, Vector};

/// A position in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The point at `(0, 0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates the point reached by `vector` from the origin.
    #[must_use]
    pub fn from_vector(vector: &Vector) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }

    /// Position vector of this point relative to the origin.
    #[must_use]
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl From<nalgebra::Point3<f64>> for Point {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point> for nalgebra::Point3<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

/// Points lift to `w = 1`. On the way back the coordinates are divided by
/// `w`.
///
/// `w = 0` is a point at infinity: a direction, not a position. An affine
/// matrix never maps a point there, only a projective one does. Such input
/// is returned with its `x, y, z` unchanged and a `debug` event is logged.
impl Homogeneous for Point {
    fn to_homogeneous(&self) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, 1.0)
    }

    fn from_homogeneous(v: &Vector4) -> Self {
        if v.w == 0.0 {
            debug!(
                x = v.x,
                y = v.y,
                z = v.z,
                "point at infinity kept as its direction coordinates"
            );
            return Self::new(v.x, v.y, v.z);
        }
        if v.w == 1.0 {
            Self::new(v.x, v.y, v.z)
        } else {
            Self::new(v.x / v.w, v.y / v.w, v.z / v.w)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arbitrary_point, arbitrary_vector};
    use proptest::prelude::*;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::new(x, y, z)
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::origin());
        assert_eq!(Point::origin(), p(0.0, 0.0, 0.0));
    }

    #[test]
    fn difference_of_points_is_vector() {
        assert_eq!(p(4.0, 6.0, 8.0) - p(1.0, 2.0, 3.0), Vector::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn point_plus_vector_is_translated_point() {
        assert_eq!(p(1.0, 2.0, 3.0) + Vector::new(3.0, 4.0, 5.0), p(4.0, 6.0, 8.0));
    }

    #[test]
    fn vector_conversion() {
        let vector = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(Point::from_vector(&vector), p(1.0, 2.0, 3.0));
        assert_eq!(Point::from_vector(&vector).to_vector(), vector);
    }

    #[test]
    fn homogeneous_divides_by_w() {
        let point = Point::from_homogeneous(&Vector4::new(2.0, 4.0, 6.0, 2.0));
        assert_eq!(point, p(1.0, 2.0, 3.0));
    }

    #[test]
    fn homogeneous_point_at_infinity_keeps_coordinates() {
        let point = Point::from_homogeneous(&Vector4::new(2.0, 4.0, 6.0, 0.0));
        assert_eq!(point, p(2.0, 4.0, 6.0));
        assert!(point.x.is_finite() && point.y.is_finite() && point.z.is_finite());
    }

    #[test]
    fn homogeneous_round_trip() {
        let point = p(1.5, -2.0, 3.0);
        assert_eq!(point.to_homogeneous().w, 1.0);
        assert_eq!(Point::from_homogeneous(&point.to_homogeneous()), point);
    }

    #[test]
    fn display() {
        assert_eq!(p(1.0, 2.0, 3.5).to_string(), "Point(x=1, y=2, z=3.5)");
    }

    proptest! {
        #[test]
        fn translation_recovers_displacement(
            point in arbitrary_point(),
            vector in arbitrary_vector(),
        ) {
            let moved = point + vector;
            let displacement = moved - point;
            prop_assert!((displacement - vector).length() < 1e-9);
        }
    }
}
