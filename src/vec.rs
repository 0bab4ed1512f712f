//! 2D vector type for planar physics.

use crate::error::PhysicsError;
use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// 2D vector value.
///
/// Every operation returns a new value; nothing mutates in place.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Vector with both components set to the same value.
    pub fn splat(value: F) -> Self { Vec2 { x: value, y: value } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Euclidean length. Zero for the zero vector.
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Divide both components by a scalar.
    ///
    /// Fails with [`PhysicsError::DivideByZero`] rather than producing
    /// infinities or NaN.
    pub fn try_div(self, s: F) -> Result<Self, PhysicsError> {
        if s == F::zero() {
            return Err(PhysicsError::DivideByZero);
        }
        Ok(Vec2 { x: self.x / s, y: self.y / s })
    }

    /// Raise each component to `exponent`.
    pub fn powf(self, exponent: F) -> Self {
        Vec2 { x: self.x.powf(exponent), y: self.y.powf(exponent) }
    }

    /// Unit vector pointing the same way.
    pub fn normalize(self) -> Result<Self, PhysicsError> {
        self.try_div(self.length())
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
