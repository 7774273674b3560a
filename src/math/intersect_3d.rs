//! Closed-form solvers shared by lines, planes and triangles.
//!
//! Every solver eliminates unknowns by cross-multiplying the parametric
//! equations, which leaves one scalar factor per axis. Axes whose denominator
//! is within [`TOLERANCE`] of zero carry no information and are skipped.

use tracing::trace;

use crate::geometry::{Line, Plane, Point, Vector};

use super::TOLERANCE;

/// Ratio `numerator.axis / denominator.axis` on the first axis (x, y, z order)
/// whose denominator clears [`TOLERANCE`].
fn first_axis_ratio(numerator: &Vector, denominator: &Vector) -> Option<f64> {
    numerator
        .to_array()
        .into_iter()
        .zip(denominator.to_array())
        .find(|(_, den)| den.abs() > TOLERANCE)
        .map(|(num, den)| num / den)
}

/// Solves `numerator = factor * denominator` for `factor`.
///
/// Each axis is visited in x, y, z order. An axis with a usable denominator
/// overwrites the factor with its own ratio, so the last such axis wins. An
/// axis with a near-zero denominator must have a numerator exactly equal to
/// it, otherwise the system is inconsistent and `None` is returned.
///
/// Also `None` when no axis has a usable denominator.
#[must_use]
pub fn factor_check(numerator: &Vector, denominator: &Vector) -> Option<f64> {
    let mut factor = None;

    for (num, den) in numerator.to_array().into_iter().zip(denominator.to_array()) {
        if den.abs() > TOLERANCE {
            factor = Some(num / den);
        } else if num != den {
            return None;
        }
    }

    factor
}

/// Intersection point of two infinite lines.
///
/// From `p1 + a * v1 = p2 + b * v2`, crossing both sides with `v2` gives
/// `a * (v1 x v2) = (p2 - p1) x v2`. Returns `None` for parallel lines and for
/// skew lines whose cross products vanish.
#[must_use]
pub fn line_line_intersect(a: &Line, b: &Line) -> Option<Point> {
    let va = a.direction().cross_product(b.direction());
    let vb = (*b.position() - *a.position()).cross_product(b.direction());

    let Some(t) = first_axis_ratio(&vb, &va) else {
        trace!(%a, %b, "lines are parallel, no intersection");
        return None;
    };
    Some(a.point(t))
}

/// Intersection point of an infinite line with an unbounded plane.
///
/// Eliminates both plane factors by crossing with `direction_b` and then
/// with `direction_a x direction_b`. Returns `None` when the line is parallel
/// to the plane.
#[must_use]
pub fn line_plane_intersect(line: &Line, plane: &Plane) -> Option<Point> {
    let da = plane.direction_a();
    let db = plane.direction_b();
    let span = da.cross_product(db);

    let va = line.direction().cross_product(db).cross_product(&span);
    let vb = (*plane.position() - *line.position())
        .cross_product(db)
        .cross_product(&span);

    let Some(t) = first_axis_ratio(&vb, &va) else {
        trace!(%line, %plane, "line is parallel to plane, no intersection");
        return None;
    };
    Some(line.point(t))
}

/// Solves `point - position = a * direction_a + b * direction_b` for `(a, b)`.
///
/// `b` is only attempted once `a` has been found.
#[must_use]
pub fn plane_point_factors(plane: &Plane, point: &Point) -> (Option<f64>, Option<f64>) {
    let offset = *point - *plane.position();
    let da = plane.direction_a();
    let db = plane.direction_b();

    let factor_a = factor_check(&offset.cross_product(db), &da.cross_product(db));
    let Some(factor_a) = factor_a else {
        trace!(%point, %plane, "point is not solvable against plane basis");
        return (None, None);
    };

    let factor_b = factor_check(&offset.cross_product(da), &db.cross_product(da));
    if factor_b.is_none() {
        trace!(%point, %plane, "second plane factor is not solvable");
    }
    (Some(factor_a), factor_b)
}
