use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};
use crate::math::{Vector3, Vector4, TOLERANCE};

use super::Homogeneous;

/// A free 3D vector (direction and magnitude).
///
/// Equality is exact and componentwise; tolerance-based checks are explicit
/// methods such as [`Vector::is_perpendicular`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a vector from a sequence of exactly three coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidValue`] if the sequence does not hold
    /// exactly three values.
    pub fn from_sequence(sequence: &[f64]) -> Result<Self> {
        match *sequence {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(GeometryError::InvalidValue(format!(
                "sequence of length {} cannot be converted into a vector",
                sequence.len()
            ))
            .into()),
        }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        Vector3::from(*self).norm()
    }

    #[must_use]
    pub fn dot_product(&self, other: &Vector) -> f64 {
        Vector3::from(*self).dot(&Vector3::from(*other))
    }

    #[must_use]
    pub fn cross_product(&self, other: &Vector) -> Vector {
        Vector3::from(*self).cross(&Vector3::from(*other)).into()
    }

    /// Returns `true` if the dot product of both vectors is below [`TOLERANCE`].
    #[must_use]
    pub fn is_perpendicular(&self, other: &Vector) -> bool {
        self.dot_product(other).abs() < TOLERANCE
    }

    /// Angle between two vectors in radians.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Domain`] if either vector has zero length.
    pub fn angle(&self, other: &Vector) -> Result<f64> {
        let len1 = self.length();
        let len2 = other.length();
        if len1 == 0.0 || len2 == 0.0 {
            return Err(GeometryError::Domain(
                "vector length cannot be 0 for calculating angle".into(),
            )
            .into());
        }
        // Rounding can push the cosine slightly outside [-1, 1].
        let cos = (self.dot_product(other) / (len1 * len2)).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    /// Returns the vector scaled to length 1.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] for the zero vector.
    pub fn normalized(&self) -> Result<Vector> {
        let len = self.length();
        if len == 0.0 {
            return Err(
                GeometryError::DivisionByZero("cannot normalize a zero-length vector").into(),
            );
        }
        Ok(self.scaled(1.0 / len))
    }

    #[must_use]
    pub fn scaled(&self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Projects this vector onto `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `other` has zero length.
    pub fn projection(&self, other: &Vector) -> Result<Vector> {
        let denominator = other.dot_product(other);
        if denominator == 0.0 {
            return Err(
                GeometryError::DivisionByZero("cannot project onto a zero-length vector").into(),
            );
        }
        Ok(other.scaled(self.dot_product(other) / denominator))
    }

    /// Coordinate by index: 0 = x, 1 = y, 2 = z.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] for any other index.
    pub fn coordinate(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeometryError::IndexOutOfRange { index }.into()),
        }
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scaled(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scaled(self)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = crate::error::ThreedError;

    fn try_from(sequence: &[f64]) -> Result<Self> {
        Self::from_sequence(sequence)
    }
}

impl From<Vector3> for Vector {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vector3 {
    fn from(v: Vector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl Homogeneous for Vector {
    fn to_homogeneous(&self) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, 0.0)
    }

    fn from_homogeneous(v: &Vector4) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ThreedError;
    use crate::test_support::arbitrary_vector;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn v(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(x, y, z)
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector::default(), Vector::zero());
        assert_eq!(Vector::default(), v(0.0, 0.0, 0.0));
    }

    #[test]
    fn length() {
        assert_abs_diff_eq!(v(2.0, 3.0, 6.0).length(), 7.0, epsilon = TOLERANCE);
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(v(1.0, 2.0, 3.0), v(1.0, 2.0, 3.0));
        assert_ne!(v(1.0, 2.0, 3.0), v(4.0, 5.0, 6.0));
        assert_ne!(v(1.0, 2.0, 3.0), v(1.0, 2.0, 3.0 + 1e-12));
    }

    // ── arithmetic ──

    #[test]
    fn sum_difference_negation() {
        assert_eq!(v(1.0, 2.0, 3.0) + v(4.0, 5.0, 6.0), v(5.0, 7.0, 9.0));
        assert_eq!(v(1.0, 9.0, 11.0) - v(4.0, 5.0, 6.0), v(-3.0, 4.0, 5.0));
        assert_eq!(-v(1.0, 2.0, 3.0), v(-1.0, -2.0, -3.0));
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(v(1.0, 2.0, 3.0) * 2.0, v(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v(1.0, 2.0, 3.0), v(2.0, 4.0, 6.0));
        assert_eq!(v(1.0, 2.0, 3.0).scaled(2.0), v(2.0, 4.0, 6.0));
    }

    #[test]
    fn dot_and_cross_product() {
        assert_eq!(v(1.0, 2.0, 3.0).dot_product(&v(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(
            v(2.0, 3.0, 4.0).cross_product(&v(5.0, 6.0, 7.0)),
            v(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn products_follow_component_formulas() {
        let (a, b) = (v(0.3, -1.7, 2.25), v(-4.5, 0.6, 1.1));
        let expected_cross = v(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        );
        assert_abs_diff_eq!(a.dot_product(&b), a.x * b.x + a.y * b.y + a.z * b.z, epsilon = 1e-15);
        assert_abs_diff_eq!(a.cross_product(&b), expected_cross, epsilon = 1e-15);
        let expected_length = (a.x * a.x + a.y * a.y + a.z * a.z).sqrt();
        assert_abs_diff_eq!(a.length(), expected_length, epsilon = 1e-15);
    }

    #[test]
    fn perpendicular() {
        assert!(v(1.0, 0.0, 0.0).is_perpendicular(&v(0.0, 5.0, 0.0)));
        assert!(!v(1.0, 1.0, 0.0).is_perpendicular(&v(0.0, 5.0, 0.0)));
    }

    // ── angle ──

    #[test]
    fn angle_between_vectors() {
        let angle = v(1.0, 2.0, 3.0).angle(&v(4.0, 5.0, 6.0)).unwrap();
        assert_abs_diff_eq!(crate::math::to_degree(angle), 12.93, epsilon = 1e-2);

        let right = v(1.0, 0.0, 0.0).angle(&v(0.0, 1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(right, std::f64::consts::FRAC_PI_2, epsilon = TOLERANCE);
    }

    #[test]
    fn angle_of_parallel_vectors_is_zero() {
        let angle = v(1.0, 1.0, 1.0).angle(&v(3.0, 3.0, 3.0)).unwrap();
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_with_zero_vector_fails() {
        let expected = Err(ThreedError::Geometry(GeometryError::Domain(
            "vector length cannot be 0 for calculating angle".into(),
        )));
        assert_eq!(v(0.0, 0.0, 0.0).angle(&v(1.0, 2.0, 3.0)), expected);
        assert_eq!(v(1.0, 2.0, 3.0).angle(&v(0.0, 0.0, 0.0)), expected);
    }

    // ── normalization and projection ──

    #[test]
    fn normalized_has_unit_length() {
        assert_abs_diff_eq!(
            v(2.0, 2.0, 2.0).normalized().unwrap().length(),
            1.0,
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn normalized_zero_vector_fails() {
        assert!(matches!(
            Vector::zero().normalized(),
            Err(ThreedError::Geometry(GeometryError::DivisionByZero(_)))
        ));
    }

    #[test]
    fn projection_onto_axis() {
        assert_eq!(
            v(1.0, 1.0, 0.0).projection(&v(2.0, 0.0, 0.0)).unwrap(),
            v(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn projection_onto_zero_vector_fails() {
        assert!(matches!(
            v(1.0, 1.0, 0.0).projection(&Vector::zero()),
            Err(ThreedError::Geometry(GeometryError::DivisionByZero(_)))
        ));
    }

    // ── conversions ──

    #[test]
    fn sequences_and_tuples() {
        assert_eq!(Vector::from_sequence(&[1.0, 2.0, 3.0]).unwrap(), v(1.0, 2.0, 3.0));
        assert!(Vector::from_sequence(&[1.0, 2.0]).is_err());
        assert!(Vector::try_from(&[1.0, 2.0, 3.0, 4.0][..]).is_err());
        assert_eq!(Vector::from([1.0, 2.5, 3.0]).to_array(), [1.0, 2.5, 3.0]);
        assert_eq!(Vector::from((1.0, 2.5, 3.0)).to_tuple(), (1.0, 2.5, 3.0));
    }

    #[test]
    fn coordinate_by_index() {
        let vector = v(1.0, 2.0, 3.0);
        assert_eq!(vector.coordinate(0).unwrap(), 1.0);
        assert_eq!(vector.coordinate(1).unwrap(), 2.0);
        assert_eq!(vector.coordinate(2).unwrap(), 3.0);
        assert_eq!(
            vector.coordinate(3),
            Err(ThreedError::Geometry(GeometryError::IndexOutOfRange { index: 3 }))
        );
    }

    #[test]
    fn nalgebra_round_trip() {
        let n: nalgebra::Vector3<f64> = v(1.0, -2.0, 3.5).into();
        assert_eq!(n, nalgebra::Vector3::new(1.0, -2.0, 3.5));
        assert_eq!(Vector::from(n), v(1.0, -2.0, 3.5));
    }

    #[test]
    fn display() {
        assert_eq!(v(1.0, 2.5, -3.0).to_string(), "Vector(x=1, y=2.5, z=-3)");
    }

    proptest! {
        #[test]
        fn cross_product_is_anticommutative(a in arbitrary_vector(), b in arbitrary_vector()) {
            prop_assert_eq!(a.cross_product(&b), -b.cross_product(&a));
        }

        #[test]
        fn cross_product_is_perpendicular_to_operands(
            a in arbitrary_vector(),
            b in arbitrary_vector(),
        ) {
            let cross = a.cross_product(&b);
            let scale = 1.0 + a.length() * b.length() * (a.length() + b.length());
            prop_assert!(cross.dot_product(&a).abs() <= 1e-9 * scale);
            prop_assert!(cross.dot_product(&b).abs() <= 1e-9 * scale);
        }

        #[test]
        fn scaling_by_one_is_identity(a in arbitrary_vector()) {
            prop_assert_eq!(a.scaled(1.0), a);
        }

        #[test]
        fn normalized_length_is_one(a in arbitrary_vector()) {
            prop_assume!(a.length() > TOLERANCE);
            let n = a.normalized().unwrap();
            prop_assert!((n.length() - 1.0).abs() < TOLERANCE);
        }
    }
}
