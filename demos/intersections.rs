//! Walks through the main intersection queries of the kernel.
//!
//! Run with `RUST_LOG=threed=trace cargo run --example intersections` to see
//! the kernel's trace output for the branches that yield no result.

use threed::math::{to_radian, TOLERANCE};
use threed::operations::transform::Rotate;
use threed::{Line, Plane, Point, Quaternion, Triangle, Vector};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> threed::Result<()> {
    // Default: WARN for everything, INFO for the demo itself.
    // Override with RUST_LOG (e.g. RUST_LOG=threed=trace).
    let env_filter = EnvFilter::from_default_env()
        .add_directive(LevelFilter::WARN.into())
        .add_directive("intersections=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Line::new(Point::new(0.0, 0.0, 0.0), Vector::new(1.0, 1.0, 0.0));
    let b = Line::new(Point::new(2.0, 0.0, 0.0), Vector::new(-1.0, 1.0, 0.0));
    info!(%a, %b, hit = ?a.intersection(&b), "line / line");

    let skew = Line::new(Point::new(0.0, 0.0, 1.0), Vector::new(1.0, -1.0, 0.0));
    info!(%a, %skew, hit = ?a.intersection(&skew), "skew lines");

    let floor = Plane::new(
        Point::origin(),
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
    );
    let drop = Line::new(Point::new(1.0, 2.0, 5.0), Vector::new(0.0, 0.0, -1.0));
    info!(%floor, %drop, hit = ?floor.intersection(&drop), "line / plane");

    let shelf = Plane::new(
        Point::new(0.0, 0.0, 1.0),
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
    );
    let above = Point::new(3.0, -4.0, 2.5);
    info!(
        point = %above,
        in_plane_offset = %shelf.projection_point(&above)?,
        closest = %shelf.closest_point(&above)?,
        "projection onto plane"
    );

    let triangle = Triangle::from_points(
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(0.0, 4.0, 0.0),
    )?;
    let inside = Line::new(Point::new(1.0, 1.0, 3.0), Vector::new(0.0, 0.0, 1.0));
    let outside = Line::new(Point::new(3.0, 3.0, 3.0), Vector::new(0.0, 0.0, 1.0));
    info!(%triangle, hit = ?triangle.intersection(&inside), "line through triangle");
    info!(%triangle, hit = ?triangle.intersection(&outside), "line past triangle");

    let quarter = Quaternion::from_axis_angle(&Vector::new(0.0, 0.0, 1.0), to_radian(90.0))?;
    let x = Vector::new(1.0, 0.0, 0.0);
    info!(%quarter, rotated = %quarter.rotate(&x)?, "quaternion rotation");

    let rotate = Rotate::new(Point::origin(), Vector::new(0.0, 0.0, 1.0), to_radian(90.0));
    let turned = rotate.apply(&triangle)?;
    let still_hit = turned.intersection(&Line::new(
        Point::new(-1.0, 1.0, 3.0),
        Vector::new(0.0, 0.0, 1.0),
    ));
    info!(%turned, hit = ?still_hit, tolerance = TOLERANCE, "rotated triangle");

    Ok(())
}
