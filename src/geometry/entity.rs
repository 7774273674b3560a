//! Dynamically typed operands.
//!
//! The typed API rejects wrong operand kinds at compile time. [`Entity`] is
//! the boundary for callers that only learn the kind at runtime (parsed
//! input, scripting layers): every operation checks the operand kinds and
//! reports a [`GeometryError::TypeMismatch`] naming the operation and the
//! offending kind instead of coercing.

use crate::error::{GeometryError, Result, ThreedError};

use super::{Line, Plane, Point, Quaternion, Triangle, Vector};

/// Any value the kernel operates on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity {
    Scalar(f64),
    Vector(Vector),
    Point(Point),
    Line(Line),
    Plane(Plane),
    Triangle(Triangle),
    Quaternion(Quaternion),
}

fn type_mismatch(operation: &'static str, found: &Entity) -> ThreedError {
    GeometryError::TypeMismatch {
        operation,
        found: found.kind(),
    }
    .into()
}

impl Entity {
    /// Human-readable name of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Scalar(_) => "scalar",
            Entity::Vector(_) => "vector",
            Entity::Point(_) => "point",
            Entity::Line(_) => "line",
            Entity::Plane(_) => "plane",
            Entity::Triangle(_) => "triangle",
            Entity::Quaternion(_) => "quaternion",
        }
    }

    // ── construction ──

    /// Builds a line from a point and a vector.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other operand kinds.
    pub fn line(position: &Entity, direction: &Entity) -> Result<Line> {
        match (position, direction) {
            (Entity::Point(p), Entity::Vector(d)) => Ok(Line::new(*p, *d)),
            (Entity::Point(_), other) | (other, _) => {
                Err(type_mismatch("line construction", other))
            }
        }
    }

    /// Builds a plane from a point and two vectors.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other operand kinds.
    pub fn plane(position: &Entity, direction_a: &Entity, direction_b: &Entity) -> Result<Plane> {
        let Entity::Point(p) = position else {
            return Err(type_mismatch("plane construction", position));
        };
        let Entity::Vector(a) = direction_a else {
            return Err(type_mismatch("plane construction", direction_a));
        };
        let Entity::Vector(b) = direction_b else {
            return Err(type_mismatch("plane construction", direction_b));
        };
        Ok(Plane::new(*p, *a, *b))
    }

    /// Builds a triangle from three points, or from three closed-loop vectors.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless all three operands are points or all
    /// three are vectors, and an invalid-value error for an open vector loop.
    pub fn triangle(a: &Entity, b: &Entity, c: &Entity) -> Result<Triangle> {
        match (a, b, c) {
            (Entity::Point(a), Entity::Point(b), Entity::Point(c)) => Ok(Triangle::new(*a, *b, *c)),
            (Entity::Vector(a), Entity::Vector(b), Entity::Vector(c)) => {
                Triangle::from_vectors(*a, *b, *c)
            }
            (Entity::Point(_), Entity::Point(_), other)
            | (Entity::Vector(_), Entity::Vector(_), other)
            | (Entity::Point(_) | Entity::Vector(_), other, _)
            | (other, _, _) => Err(type_mismatch("triangle construction", other)),
        }
    }

    // ── arithmetic ──

    /// `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless the pairing is vector + vector,
    /// point + vector, quaternion + quaternion or scalar + scalar.
    pub fn try_add(&self, rhs: &Entity) -> Result<Entity> {
        match (self, rhs) {
            (Entity::Scalar(a), Entity::Scalar(b)) => Ok(Entity::Scalar(a + b)),
            (Entity::Vector(a), Entity::Vector(b)) => Ok(Entity::Vector(*a + *b)),
            (Entity::Point(a), Entity::Vector(b)) => Ok(Entity::Point(*a + *b)),
            (Entity::Quaternion(a), Entity::Quaternion(b)) => Ok(Entity::Quaternion(*a + *b)),
            (Entity::Scalar(_), other) => Err(type_mismatch("scalar addition", other)),
            (Entity::Vector(_), other) => Err(type_mismatch("vector addition", other)),
            (Entity::Point(_), other) => Err(type_mismatch("point translation", other)),
            (Entity::Quaternion(_), other) => Err(type_mismatch("quaternion addition", other)),
            (other, _) => Err(type_mismatch("addition", other)),
        }
    }

    /// `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless the pairing is vector - vector,
    /// point - point, quaternion - quaternion or scalar - scalar.
    pub fn try_sub(&self, rhs: &Entity) -> Result<Entity> {
        match (self, rhs) {
            (Entity::Scalar(a), Entity::Scalar(b)) => Ok(Entity::Scalar(a - b)),
            (Entity::Vector(a), Entity::Vector(b)) => Ok(Entity::Vector(*a - *b)),
            (Entity::Point(a), Entity::Point(b)) => Ok(Entity::Vector(*a - *b)),
            (Entity::Quaternion(a), Entity::Quaternion(b)) => Ok(Entity::Quaternion(*a - *b)),
            (Entity::Scalar(_), other) => Err(type_mismatch("scalar subtraction", other)),
            (Entity::Vector(_), other) => Err(type_mismatch("vector subtraction", other)),
            (Entity::Point(_), other) => Err(type_mismatch("point subtraction", other)),
            (Entity::Quaternion(_), other) => Err(type_mismatch("quaternion subtraction", other)),
            (other, _) => Err(type_mismatch("subtraction", other)),
        }
    }

    /// `self * rhs`: scaling by a scalar, or the Hamilton product of two
    /// quaternions.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other pairing.
    pub fn try_mul(&self, rhs: &Entity) -> Result<Entity> {
        match (self, rhs) {
            (Entity::Scalar(a), Entity::Scalar(b)) => Ok(Entity::Scalar(a * b)),
            (Entity::Vector(v), Entity::Scalar(f)) | (Entity::Scalar(f), Entity::Vector(v)) => {
                Ok(Entity::Vector(v.scaled(*f)))
            }
            (Entity::Quaternion(q), Entity::Scalar(f))
            | (Entity::Scalar(f), Entity::Quaternion(q)) => {
                Ok(Entity::Quaternion(q.scaled(*f)))
            }
            (Entity::Quaternion(a), Entity::Quaternion(b)) => Ok(Entity::Quaternion(*a * *b)),
            (Entity::Scalar(_), other) => Err(type_mismatch("scalar multiplication", other)),
            (Entity::Vector(_), other) => Err(type_mismatch("vector scaling", other)),
            (Entity::Quaternion(_), other) => Err(type_mismatch("quaternion product", other)),
            (other, _) => Err(type_mismatch("multiplication", other)),
        }
    }

    /// `-self`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless `self` is a scalar or a vector.
    pub fn try_neg(&self) -> Result<Entity> {
        match self {
            Entity::Scalar(a) => Ok(Entity::Scalar(-a)),
            Entity::Vector(v) => Ok(Entity::Vector(-*v)),
            other => Err(type_mismatch("negation", other)),
        }
    }

    // ── vector algebra ──

    /// Dot product of two vectors.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless both operands are vectors.
    pub fn dot_product(&self, rhs: &Entity) -> Result<f64> {
        let (a, b) = self.vector_pair(rhs, "dot product")?;
        Ok(a.dot_product(b))
    }

    /// Cross product of two vectors.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless both operands are vectors.
    pub fn cross_product(&self, rhs: &Entity) -> Result<Entity> {
        let (a, b) = self.vector_pair(rhs, "cross product")?;
        Ok(Entity::Vector(a.cross_product(b)))
    }

    /// Projection of a vector onto a vector, or of a point onto a plane.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other pairing, and the underlying
    /// division-by-zero error for degenerate targets.
    pub fn projection(&self, target: &Entity) -> Result<Entity> {
        match (self, target) {
            (Entity::Vector(v), Entity::Vector(onto)) => Ok(Entity::Vector(v.projection(onto)?)),
            (Entity::Point(p), Entity::Plane(plane)) => {
                Ok(Entity::Point(plane.projection_point(p)?))
            }
            (Entity::Vector(_) | Entity::Point(_), other) | (other, _) => {
                Err(type_mismatch("projection", other))
            }
        }
    }

    /// Angle between two vectors or between two lines, in radians.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other pairing and a domain error for
    /// zero-length directions.
    pub fn angle(&self, rhs: &Entity) -> Result<f64> {
        match (self, rhs) {
            (Entity::Vector(a), Entity::Vector(b)) => a.angle(b),
            (Entity::Line(a), Entity::Line(b)) => a.angle(b),
            (Entity::Vector(_) | Entity::Line(_), other) | (other, _) => {
                Err(type_mismatch("angle", other))
            }
        }
    }

    // ── queries ──

    /// Distance from a line to a point.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless `self` is a line and `point` a point.
    pub fn distance(&self, point: &Entity) -> Result<f64> {
        match (self, point) {
            (Entity::Line(line), Entity::Point(p)) => line.distance(p),
            (Entity::Line(_), other) | (other, _) => Err(type_mismatch("distance", other)),
        }
    }

    /// Containment of a point in a line, plane patch or triangle.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless `self` is a line, plane or triangle and
    /// `point` is a point.
    pub fn has_point(&self, point: &Entity) -> Result<bool> {
        match (self, point) {
            (Entity::Line(line), Entity::Point(p)) => line.has_point(p),
            (Entity::Plane(plane), Entity::Point(p)) => Ok(plane.has_point(p, true)),
            (Entity::Triangle(triangle), Entity::Point(p)) => Ok(triangle.has_point(p)),
            (Entity::Line(_) | Entity::Plane(_) | Entity::Triangle(_), other) | (other, _) => {
                Err(type_mismatch("containment test", other))
            }
        }
    }

    /// Intersection of a line, plane or triangle with a line.
    ///
    /// `Ok(None)` means the operands are valid but do not intersect.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch unless `self` is a line, plane or triangle and
    /// `line` is a line.
    pub fn intersection(&self, line: &Entity) -> Result<Option<Point>> {
        match (self, line) {
            (Entity::Line(a), Entity::Line(b)) => Ok(a.intersection(b)),
            (Entity::Plane(plane), Entity::Line(b)) => Ok(plane.intersection(b)),
            (Entity::Triangle(triangle), Entity::Line(b)) => Ok(triangle.intersection(b)),
            (Entity::Line(_) | Entity::Plane(_) | Entity::Triangle(_), other) | (other, _) => {
                Err(type_mismatch("intersection", other))
            }
        }
    }

    fn vector_pair<'a>(
        &'a self,
        rhs: &'a Entity,
        operation: &'static str,
    ) -> Result<(&'a Vector, &'a Vector)> {
        match (self, rhs) {
            (Entity::Vector(a), Entity::Vector(b)) => Ok((a, b)),
            (Entity::Vector(_), other) | (other, _) => Err(type_mismatch(operation, other)),
        }
    }
}

macro_rules! entity_conversions {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(value: $ty) -> Self {
                    Entity::$variant(value)
                }
            }

            impl TryFrom<Entity> for $ty {
                type Error = ThreedError;

                fn try_from(entity: Entity) -> Result<Self> {
                    match entity {
                        Entity::$variant(value) => Ok(value),
                        other => Err(type_mismatch(
                            concat!("conversion to ", stringify!($variant)),
                            &other,
                        )),
                    }
                }
            }
        )*
    };
}

entity_conversions!(
    Scalar(f64),
    Vector(Vector),
    Point(Point),
    Line(Line),
    Plane(Plane),
    Triangle(Triangle),
    Quaternion(Quaternion),
);
