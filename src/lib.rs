//! A small 3D analytic-geometry kernel.
//!
//! Vectors, points, lines, planes, triangles and quaternions with
//! tolerance-aware intersection and containment queries, plus affine
//! transforms in [`operations::transform`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

#[cfg(test)]
mod test_support;

pub use error::{Result, ThreedError};
pub use geometry::{Entity, Line, Plane, Point, Quaternion, Triangle, Vector};
