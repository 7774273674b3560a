use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::error::{GeometryError, Result};
use crate::math::Matrix4;

use super::Vector;

/// A quaternion `w + xi + yj + zk`.
///
/// Unit norm is not enforced; rotation helpers normalize where they need to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Creates a new quaternion.
    #[must_use]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The multiplicative identity.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Pure-imaginary embedding of a vector: `(0, v.x, v.y, v.z)`.
    #[must_use]
    pub fn from_vector(vector: &Vector) -> Self {
        Self::new(0.0, vector.x, vector.y, vector.z)
    }

    /// Unit rotation quaternion for a rotation of `angle` radians about `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `axis` has zero length.
    pub fn from_axis_angle(axis: &Vector, angle: f64) -> Result<Self> {
        let axis = axis.normalized()?;
        let (sin, cos) = (angle / 2.0).sin_cos();
        Ok(Self::new(cos, axis.x * sin, axis.y * sin, axis.z * sin))
    }

    /// Imaginary part as a vector.
    #[must_use]
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Squared magnitude `w² + x² + y² + z²`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.norm().sqrt()
    }

    #[must_use]
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }

    #[must_use]
    pub fn scaled(&self, factor: f64) -> Quaternion {
        Quaternion::new(
            self.w * factor,
            self.x * factor,
            self.y * factor,
            self.z * factor,
        )
    }

    /// Multiplicative inverse `conjugate / norm`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] for the zero quaternion.
    pub fn inverse(&self) -> Result<Quaternion> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(GeometryError::DivisionByZero("cannot invert a zero quaternion").into());
        }
        Ok(self.conjugate().scaled(1.0 / norm))
    }

    /// Rotates `vector` by the sandwich product `q * v * q⁻¹`.
    ///
    /// Works for any non-zero quaternion; the magnitude cancels out.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] for the zero quaternion.
    pub fn rotate(&self, vector: &Vector) -> Result<Vector> {
        let rotated = *self * Quaternion::from_vector(vector) * self.inverse()?;
        Ok(rotated.to_vector())
    }

    /// Homogeneous rotation matrix equivalent to [`Quaternion::rotate`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] for the zero quaternion.
    #[allow(clippy::many_single_char_names)]
    #[rustfmt::skip]
    pub fn to_rotation_matrix(&self) -> Result<Matrix4> {
        let length = self.length();
        if length == 0.0 {
            return Err(GeometryError::DivisionByZero("cannot normalize a zero quaternion").into());
        }
        let Quaternion { w, x, y, z } = self.scaled(1.0 / length);

        Ok(Matrix4::new(
            1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y - w * z), 2.0 * (x * z + w * y), 0.0,
            2.0 * (x * y + w * z), 1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z - w * x), 0.0,
            2.0 * (x * z - w * y), 2.0 * (y * z + w * x), 1.0 - 2.0 * (x * x + y * y), 0.0,
            0.0, 0.0, 0.0, 1.0,
        ))
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w={}, x={}, y={}, z={})",
            self.w, self.x, self.y, self.z
        )
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: f64) -> Quaternion {
        self.scaled(rhs)
    }
}

impl From<nalgebra::Quaternion<f64>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f64>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}
