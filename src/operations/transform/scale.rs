use crate::error::{OperationError, Result};
use crate::geometry::Point;
use crate::math::{Matrix4, TOLERANCE};

use super::Transformable;

/// Scales values uniformly from a center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    center: Point,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(center: Point, factor: f64) -> Self {
        Self { center, factor }
    }

    /// Homogeneous scaling matrix about the center.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is zero, which would collapse every
    /// value onto the center.
    pub fn matrix(&self) -> Result<Matrix4> {
        if self.factor.abs() < TOLERANCE {
            return Err(OperationError::InvalidInput("scale factor must be non-zero".into()).into());
        }
        let center: nalgebra::Point3<f64> = self.center.into();
        let t_neg = Matrix4::new_translation(&(-center.coords));
        let t_pos = Matrix4::new_translation(&center.coords);
        Ok(t_pos * Matrix4::new_scaling(self.factor) * t_neg)
    }

    /// Applies the scaling to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is zero.
    pub fn apply<T: Transformable>(&self, value: &T) -> Result<T> {
        Ok(value.transformed(&self.matrix()?))
    }
}
