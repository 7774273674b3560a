use std::fmt;

use tracing::debug;

use crate::error::{GeometryError, Result};

use super::{Line, Plane, Point, Vector};

/// A triangle in 3D space.
///
/// Two construction paths lead to the same value:
///
/// * [`Triangle::new`] takes the three corner points as given.
/// * [`Triangle::from_vectors`] takes three edge vectors forming a closed
///   loop (`v1 + v2 + v3 == 0`). The loop is anchored at the origin, so the
///   corners are `origin`, `origin + v1` and `origin + v1 + v2`.
///
/// [`Triangle::vectors`] returns the loop form of either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
}

impl Triangle {
    /// Creates a triangle from its three corner points.
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Creates a triangle from three closed-loop edge vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidValue`] if the vectors do not sum
    /// exactly to the zero vector.
    pub fn from_vectors(v1: Vector, v2: Vector, v3: Vector) -> Result<Self> {
        if !Self::is_valid(&v1, &v2, &v3) {
            debug!(%v1, %v2, %v3, "rejecting open triangle loop");
            return Err(GeometryError::InvalidValue(
                "given vectors do not represent a closed triangle".into(),
            )
            .into());
        }
        let a = Point::origin();
        let b = a + v1;
        Ok(Self::new(a, b, b + v2))
    }

    /// Creates a triangle from three points, rejecting coincident corners.
    ///
    /// Unlike [`Triangle::new`] every edge of the loop must have non-zero
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidValue`] if any edge has zero length.
    pub fn from_points(a: Point, b: Point, c: Point) -> Result<Self> {
        let triangle = Self::new(a, b, c);
        if triangle.vectors().iter().any(|edge| edge.length() == 0.0) {
            debug!(%triangle, "rejecting triangle with zero-length edge");
            return Err(GeometryError::InvalidValue(
                "triangle edges must have non-zero length".into(),
            )
            .into());
        }
        Ok(triangle)
    }

    /// Returns `true` if the three vectors close into a loop.
    ///
    /// Equality with the zero vector is exact.
    #[must_use]
    pub fn is_valid(v1: &Vector, v2: &Vector, v3: &Vector) -> bool {
        *v1 + *v2 + *v3 == Vector::zero()
    }

    /// The three corner points in construction order.
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The closed edge loop `a→b`, `b→c`, `c→a`.
    #[must_use]
    pub fn vectors(&self) -> [Vector; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// Plane through the triangle with the two edges leaving `a` as its basis.
    ///
    /// Factors `(s, t)` of this plane are barycentric-style coordinates: the
    /// triangle is `s, t >= 0` and `s + t <= 1`.
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::new(self.a, self.b - self.a, self.c - self.a)
    }

    /// Returns `true` if `point` lies inside the triangle or on its boundary.
    #[must_use]
    pub fn has_point(&self, point: &Point) -> bool {
        match self.plane().calculate_point_factors(point) {
            (Some(s), Some(t)) => {
                (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) && s + t <= 1.0
            }
            _ => false,
        }
    }

    /// Intersection point of `line` with the triangle.
    ///
    /// Returns `None` if the line is parallel to the triangle's plane or hits
    /// the plane outside the triangle.
    #[must_use]
    pub fn intersection(&self, line: &Line) -> Option<Point> {
        self.plane()
            .intersection(line)
            .filter(|point| self.has_point(point))
    }

    /// Area of the triangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * (self.b - self.a).cross_product(&(self.c - self.a)).length()
    }

    /// Arithmetic mean of the three corners.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let sum = self.a.to_vector() + self.b.to_vector() + self.c.to_vector();
        Point::from_vector(&sum.scaled(1.0 / 3.0))
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.a, self.b, self.c)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ThreedError;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(x, y, z)
    }

    fn right_triangle() -> Triangle {
        Triangle::new(p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(3.0, 3.0, 0.0))
    }

    #[test]
    fn points_keep_construction_order() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert_eq!(Triangle::new(a, b, c).points(), [a, b, c]);
    }

    // ── closed loop form ──

    #[test]
    fn from_vectors_accepts_closed_loop() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let (v1, v2, v3) = (b - a, c - b, a - c);
        assert!(Triangle::is_valid(&v1, &v2, &v3));

        let triangle = Triangle::from_vectors(v1, v2, v3).unwrap();
        assert_eq!(triangle.vectors(), [v1, v2, v3]);
        assert_eq!(triangle.points(), [a, b, c]);
    }

    #[test]
    fn from_vectors_rejects_open_loop() {
        let ones = v(1.0, 1.0, 1.0);
        assert!(!Triangle::is_valid(&ones, &ones, &ones));
        assert_eq!(
            Triangle::from_vectors(ones, ones, ones),
            Err(ThreedError::Geometry(GeometryError::InvalidValue(
                "given vectors do not represent a closed triangle".into()
            )))
        );
    }

    #[test]
    fn from_points_rejects_zero_length_edge() {
        let a = p(1.0, 2.0, 3.0);
        assert!(matches!(
            Triangle::from_points(a, a, p(0.0, 0.0, 0.0)),
            Err(ThreedError::Geometry(GeometryError::InvalidValue(_)))
        ));
        assert!(Triangle::from_points(a, p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn vectors_of_point_triangle_close() {
        let [v1, v2, v3] = right_triangle().vectors();
        assert!(Triangle::is_valid(&v1, &v2, &v3));
    }

    // ── has_point ──

    #[test]
    fn has_point_inside() {
        assert!(right_triangle().has_point(&p(2.0, 1.0, 0.0)));
    }

    #[test]
    fn has_point_just_outside() {
        assert!(!right_triangle().has_point(&p(3.001, 0.0, 0.0)));
        assert!(!right_triangle().has_point(&p(1.0, 2.0, 0.0)));
    }

    #[test]
    fn has_point_off_plane() {
        assert!(!right_triangle().has_point(&p(2.0, 1.0, 0.5)));
    }

    #[test]
    fn vertices_and_edge_midpoints_are_inside() {
        let triangle = right_triangle();
        let [a, b, c] = triangle.points();
        for point in [a, b, c] {
            assert!(triangle.has_point(&point), "vertex {point}");
        }
        for (from, to) in [(a, b), (b, c), (c, a)] {
            let midpoint = Line::from_points(from, to).point(0.5);
            assert!(triangle.has_point(&midpoint), "midpoint {midpoint}");
        }
    }

    #[test]
    fn parallelogram_corner_is_outside() {
        // Inside the plane patch spanned from `a`, but not inside the triangle.
        let triangle = right_triangle();
        let far = triangle.plane().point(1.0, 1.0);
        assert!(triangle.plane().has_point(&far, true));
        assert!(!triangle.has_point(&far));
    }

    // ── intersection ──

    #[test]
    fn line_through_triangle() {
        let line = Line::new(p(2.0, 1.0, -5.0), v(0.0, 0.0, 10.0));
        assert_eq!(right_triangle().intersection(&line), Some(p(2.0, 1.0, 0.0)));
    }

    #[test]
    fn line_missing_triangle() {
        let line = Line::new(p(1.0, 2.0, -5.0), v(0.0, 0.0, 10.0));
        assert_eq!(right_triangle().intersection(&line), None);
    }

    #[test]
    fn line_parallel_to_triangle() {
        let line = Line::new(p(1.0, 0.5, 1.0), v(1.0, 0.0, 0.0));
        assert_eq!(right_triangle().intersection(&line), None);
    }

    // ── measures ──

    #[test]
    fn area_and_centroid() {
        let triangle = right_triangle();
        assert_abs_diff_eq!(triangle.area(), 4.5);
        assert_abs_diff_eq!(triangle.centroid(), p(2.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn display() {
        let triangle = Triangle::new(p(1.0, 2.0, 3.0), p(4.0, 5.0, 6.0), p(7.0, 8.0, 9.0));
        assert_eq!(
            triangle.to_string(),
            "Triangle(Point(x=1, y=2, z=3), Point(x=4, y=5, z=6), Point(x=7, y=8, z=9))"
        );
    }
}
