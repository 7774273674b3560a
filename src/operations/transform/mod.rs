//! Affine transforms applied to kernel values through 4x4 matrices.
//!
//! Points transform with `w = 1` and pick up translation; free vectors and
//! directions transform with `w = 0` and do not.

mod general;
mod mirror;
mod rotate;
mod scale;
mod translate;

pub use general::GeneralTransform;
pub use mirror::Mirror;
pub use rotate::Rotate;
pub use scale::Scale;
pub use translate::Translate;

use crate::geometry::{Homogeneous, Line, Plane, Point, Triangle, Vector};
use crate::math::Matrix4;

/// A value that can be mapped through a 4x4 transformation matrix.
pub trait Transformable: Sized {
    /// Returns the value transformed by `matrix`.
    #[must_use]
    fn transformed(&self, matrix: &Matrix4) -> Self;
}

fn transform_homogeneous<T: Homogeneous>(matrix: &Matrix4, value: &T) -> T {
    T::from_homogeneous(&(matrix * value.to_homogeneous()))
}

impl Transformable for Vector {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        transform_homogeneous(matrix, self)
    }
}

impl Transformable for Point {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        transform_homogeneous(matrix, self)
    }
}

impl Transformable for Line {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        Line::new(
            self.position().transformed(matrix),
            self.direction().transformed(matrix),
        )
    }
}

impl Transformable for Plane {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        Plane::new(
            self.position().transformed(matrix),
            self.direction_a().transformed(matrix),
            self.direction_b().transformed(matrix),
        )
    }
}

impl Transformable for Triangle {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        let [a, b, c] = self.points();
        Triangle::new(
            a.transformed(matrix),
            b.transformed(matrix),
            c.transformed(matrix),
        )
    }
}
