mod plane;

pub use plane::Plane;

use crate::error::Result;
use crate::geometry::{ParameterRange, Point, Vector};

/// A two-parameter family of points.
pub trait Surface {
    /// Point at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point;

    /// Unit normal at parameters `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface has no normal at `(u, v)`.
    fn normal_at(&self, u: f64, v: f64) -> Result<Vector>;

    /// Parameters `(u, v)` locating `point` on the surface, or `None` if the
    /// point is not on it.
    fn parameters_of(&self, point: &Point) -> Option<(f64, f64)>;

    /// Ranges of the `u` and `v` parameters.
    fn range(&self) -> (ParameterRange, ParameterRange);
}
