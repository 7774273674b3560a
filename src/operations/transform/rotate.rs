use crate::error::{OperationError, Result};
use crate::geometry::{Point, Quaternion, Vector};
use crate::math::{Matrix4, TOLERANCE};

use super::Transformable;

/// Rotates values around an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotate {
    axis_origin: Point,
    axis_direction: Vector,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians, counter-clockwise when looking
    ///   against `axis_direction`.
    #[must_use]
    pub fn new(axis_origin: Point, axis_direction: Vector, angle: f64) -> Self {
        Self {
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Unit rotation quaternion for the axis direction and angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn quaternion(&self) -> Result<Quaternion> {
        if self.axis_direction.length() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        Quaternion::from_axis_angle(&self.axis_direction, self.angle)
    }

    /// Homogeneous rotation matrix about the axis line.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn matrix(&self) -> Result<Matrix4> {
        // Translate to origin, rotate, translate back
        let origin: nalgebra::Point3<f64> = self.axis_origin.into();
        let t_neg = Matrix4::new_translation(&(-origin.coords));
        let rot = self.quaternion()?.to_rotation_matrix()?;
        let t_pos = Matrix4::new_translation(&origin.coords);
        Ok(t_pos * rot * t_neg)
    }

    /// Applies the rotation to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn apply<T: Transformable>(&self, value: &T) -> Result<T> {
        Ok(value.transformed(&self.matrix()?))
    }
}
