use crate::error::Result;
use crate::geometry::Plane;
use crate::math::{Matrix4, Vector3};

use super::Transformable;

/// Mirrors values across a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    plane: Plane,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(plane: Plane) -> Self {
        Self { plane }
    }

    /// Homogeneous reflection matrix `I - 2 n nᵀ` about the plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane has no normal (parallel directions).
    pub fn matrix(&self) -> Result<Matrix4> {
        let normal: Vector3 = self.plane.normal()?.into();
        let origin: nalgebra::Point3<f64> = (*self.plane.position()).into();

        let reflection = nalgebra::Matrix3::identity() - normal * normal.transpose() * 2.0;
        let t_neg = Matrix4::new_translation(&(-origin.coords));
        let t_pos = Matrix4::new_translation(&origin.coords);
        Ok(t_pos * reflection.to_homogeneous() * t_neg)
    }

    /// Applies the reflection to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane has no normal.
    pub fn apply<T: Transformable>(&self, value: &T) -> Result<T> {
        Ok(value.transformed(&self.matrix()?))
    }
}
