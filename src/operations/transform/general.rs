use crate::math::Matrix4;

use super::Transformable;

/// Applies an arbitrary 4x4 transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` from a homogeneous matrix.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix4::identity())
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Transform that applies `self` first and `next` second.
    #[must_use]
    pub fn then(&self, next: &GeneralTransform) -> Self {
        Self::new(next.matrix * self.matrix)
    }

    /// Inverse transform, or `None` if the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(Self::new)
    }

    /// Applies the transform to `value`.
    #[must_use]
    pub fn apply<T: Transformable>(&self, value: &T) -> T {
        value.transformed(&self.matrix)
    }
}
