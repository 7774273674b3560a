//! Shared test helpers: `approx` comparisons for kernel values and `proptest`
//! strategies.

use approx::AbsDiffEq;
use proptest::prelude::*;

use crate::geometry::{Point, Quaternion, Vector};

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_vector().abs_diff_eq(&other.to_vector(), epsilon)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.to_vector().abs_diff_eq(&other.to_vector(), epsilon)
    }
}

/// f64 values in `[-50, 50]`, biased towards zeros, round numbers and edge cases.
pub fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(std::f64::consts::PI),
        ],
        -50.0..=50.0,
    ]
}

pub fn arbitrary_vector() -> impl Strategy<Value = Vector> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector::new(x, y, z))
}

pub fn arbitrary_point() -> impl Strategy<Value = Point> {
    arbitrary_vector().prop_map(|v| Point::from_vector(&v))
}

pub fn arbitrary_quaternion() -> impl Strategy<Value = Quaternion> {
    (scalar_strategy(), arbitrary_vector()).prop_map(|(w, v)| Quaternion::new(w, v.x, v.y, v.z))
}
