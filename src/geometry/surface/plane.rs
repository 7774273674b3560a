use std::fmt;

use crate::error::Result;
use crate::geometry::{Line, ParameterRange, Point, Vector};
use crate::math::intersect_3d::{line_plane_intersect, plane_point_factors};

use super::Surface;

/// A plane in 3D space spanned by two direction vectors.
///
/// Parametric form: `P(a, b) = position + a * direction_a + b * direction_b`.
/// The patch `a, b ∈ [0, 1]` is what [`Plane::has_point`] tests by default.
///
/// The directions are stored as given. Parallel or zero directions are
/// accepted here and surface later as unsolvable factors or a failing
/// [`Plane::normal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    position: Point,
    direction_a: Vector,
    direction_b: Vector,
}

impl Plane {
    /// Creates a new plane from a position and two spanning directions.
    #[must_use]
    pub fn new(position: Point, direction_a: Vector, direction_b: Vector) -> Self {
        Self {
            position,
            direction_a,
            direction_b,
        }
    }

    /// Returns the position of the plane.
    #[must_use]
    pub fn position(&self) -> &Point {
        &self.position
    }

    /// Returns the first spanning direction.
    #[must_use]
    pub fn direction_a(&self) -> &Vector {
        &self.direction_a
    }

    /// Returns the second spanning direction.
    #[must_use]
    pub fn direction_b(&self) -> &Vector {
        &self.direction_b
    }

    /// Point at factors `(factor_a, factor_b)` on the plane.
    #[must_use]
    pub fn point(&self, factor_a: f64, factor_b: f64) -> Point {
        self.position + self.direction_a.scaled(factor_a) + self.direction_b.scaled(factor_b)
    }

    /// Unit normal `direction_a x direction_b`.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error when the directions are parallel or
    /// zero.
    pub fn normal(&self) -> Result<Vector> {
        self.direction_a.cross_product(&self.direction_b).normalized()
    }

    /// Factors `(a, b)` that locate `point` in the plane's basis.
    ///
    /// Either factor is `None` when the point is not coplanar or the basis is
    /// degenerate. See [`factor_check`](crate::math::intersect_3d::factor_check)
    /// for the per-axis rules.
    #[must_use]
    pub fn calculate_point_factors(&self, point: &Point) -> (Option<f64>, Option<f64>) {
        plane_point_factors(self, point)
    }

    /// Returns `true` if `point` is on the plane.
    ///
    /// With `exact_match` both factors must also lie in `[0, 1]`, i.e. inside
    /// the patch spanned by the two directions. Without it coplanarity is
    /// enough.
    #[must_use]
    pub fn has_point(&self, point: &Point, exact_match: bool) -> bool {
        match self.calculate_point_factors(point) {
            (Some(a), Some(b)) => {
                !exact_match || ((0.0..=1.0).contains(&a) && (0.0..=1.0).contains(&b))
            }
            _ => false,
        }
    }

    /// Intersection point with a line.
    ///
    /// Neither the plane patch nor the line factor range bounds the result.
    /// Returns `None` when the line is parallel to the plane.
    #[must_use]
    pub fn intersection(&self, line: &Line) -> Option<Point> {
        line_plane_intersect(line, self)
    }

    /// In-plane offset of `point` from the plane position, as a point.
    ///
    /// The normal component of `point - position` is removed and the
    /// remainder is returned relative to the origin, so the result only lies
    /// on the plane when the plane passes through the origin. Use
    /// [`Plane::closest_point`] for the foot of the perpendicular.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error when the plane has no normal.
    pub fn projection_point(&self, point: &Point) -> Result<Point> {
        let offset = *point - self.position;
        let normal = self.normal()?;
        Ok(Point::from_vector(&(offset - normal.scaled(offset.dot_product(&normal)))))
    }

    /// Orthogonal projection of `point` onto the plane.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error when the plane has no normal.
    pub fn closest_point(&self, point: &Point) -> Result<Point> {
        Ok(self.position + self.projection_point(point)?.to_vector())
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plane(position={}, direction_a={}, direction_b={})",
            self.position, self.direction_a, self.direction_b
        )
    }
}

impl Surface for Plane {
    fn point_at(&self, u: f64, v: f64) -> Point {
        self.point(u, v)
    }

    fn normal_at(&self, _u: f64, _v: f64) -> Result<Vector> {
        self.normal()
    }

    fn parameters_of(&self, point: &Point) -> Option<(f64, f64)> {
        match self.calculate_point_factors(point) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    fn range(&self) -> (ParameterRange, ParameterRange) {
        (ParameterRange::UNBOUNDED, ParameterRange::UNBOUNDED)
    }
}
