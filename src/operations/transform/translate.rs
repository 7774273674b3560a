use crate::geometry::Vector;
use crate::math::{Matrix4, Vector3};

use super::Transformable;

/// Translates values by a displacement vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    displacement: Vector,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector) -> Self {
        Self { displacement }
    }

    /// Homogeneous translation matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        let displacement: Vector3 = self.displacement.into();
        Matrix4::new_translation(&displacement)
    }

    /// Applies the translation to `value`.
    #[must_use]
    pub fn apply<T: Transformable>(&self, value: &T) -> T {
        value.transformed(&self.matrix())
    }
}
