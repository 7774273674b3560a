use std::fmt;

use crate::error::{GeometryError, Result};
use crate::geometry::{ParameterRange, Point, Vector};
use crate::math::intersect_3d::line_line_intersect;
use crate::math::TOLERANCE;

use super::Curve;

/// An infinite line defined by a position and a direction vector.
///
/// The parametric form is: `P(t) = position + t * direction`. Factor 0 is the
/// position, factor 1 is `position + direction`.
///
/// The direction is stored as given; it is neither normalized nor checked
/// for zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    position: Point,
    direction: Vector,
}

impl Line {
    /// Creates a new line from a position and direction.
    #[must_use]
    pub fn new(position: Point, direction: Vector) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Creates the line from `start` towards `end`, so that factor 1 is `end`.
    #[must_use]
    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start, end - start)
    }

    /// Returns the position of the line.
    #[must_use]
    pub fn position(&self) -> &Point {
        &self.position
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Length of the direction vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction.length()
    }

    /// Angle between the directions of two lines, in radians.
    ///
    /// # Errors
    ///
    /// Returns a domain error if either direction has zero length.
    pub fn angle(&self, other: &Line) -> Result<f64> {
        self.direction.angle(&other.direction)
    }

    /// Perpendicular distance from `point` to the line.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error if the direction has zero length.
    pub fn distance(&self, point: &Point) -> Result<f64> {
        let to_point = *point - self.position;
        let along = to_point.projection(&self.direction)?;
        Ok((to_point - along).length())
    }

    /// Returns `true` if `point` lies within [`TOLERANCE`] of the line.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error if the direction has zero length.
    pub fn has_point(&self, point: &Point) -> Result<bool> {
        Ok(self.distance(point)? <= TOLERANCE)
    }

    /// Point at `factor` along the line.
    #[must_use]
    pub fn point(&self, factor: f64) -> Point {
        self.position + self.direction.scaled(factor)
    }

    /// Intersection point with another line.
    ///
    /// Lines are treated as infinite: the result is not checked against the
    /// `[0, 1]` factor range. Returns `None` for parallel or skew lines.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        line_line_intersect(self, other)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line(position={}, direction={})",
            self.position, self.direction
        )
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> Point {
        self.point(t)
    }

    fn tangent_at(&self, _t: f64) -> Result<Vector> {
        self.direction.normalized()
    }

    fn parameter_of(&self, point: &Point) -> Result<f64> {
        let denominator = self.direction.dot_product(&self.direction);
        if denominator == 0.0 {
            return Err(GeometryError::DivisionByZero("line direction has zero length").into());
        }
        Ok((*point - self.position).dot_product(&self.direction) / denominator)
    }

    fn range(&self) -> ParameterRange {
        ParameterRange::UNBOUNDED
    }

    fn is_closed(&self) -> bool {
        false
    }
}
