mod line;

pub use line::Line;

use crate::error::Result;
use crate::geometry::{ParameterRange, Point, Vector};

/// A one-parameter family of points.
pub trait Curve {
    /// Point at parameter `t`.
    fn point_at(&self, t: f64) -> Point;

    /// Unit tangent at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is degenerate at `t`.
    fn tangent_at(&self, t: f64) -> Result<Vector>;

    /// Parameter of the curve point closest to `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is degenerate.
    fn parameter_of(&self, point: &Point) -> Result<f64>;

    /// Parameter range over which the curve is defined.
    fn range(&self) -> ParameterRange;

    fn is_closed(&self) -> bool;
}
