//! Distance links between two bodies.

use crate::body::Body;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::solver::BodyHandle;

/// Each relaxation pass closes `1 / LINK_RELAXATION_DIVISOR` of the length
/// error per body. Convergence comes from repeating the pass every sub-step.
pub const LINK_RELAXATION_DIVISOR: f32 = 100.0;

/// A distance constraint between two registered bodies.
///
/// A fixed link behaves like a rod and pushes as well as pulls. A loose link
/// (`is_fixed == false`) behaves like a cord: it only pulls when stretched
/// past `length`, and the ends may come as close together as they like.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<F: Float> {
    a: BodyHandle,
    b: BodyHandle,
    length: F,
    is_fixed: bool,
}

impl<F: Float> Link<F> {
    pub(crate) fn new(
        a: BodyHandle,
        b: BodyHandle,
        length: F,
        is_fixed: bool,
    ) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SameBody(a));
        }
        if !length.is_finite() || length < F::zero() {
            return Err(PhysicsError::InvalidLinkLength);
        }
        Ok(Link { a, b, length, is_fixed })
    }

    pub fn bodies(&self) -> (BodyHandle, BodyHandle) { (self.a, self.b) }
    pub fn length(&self) -> F { self.length }
    pub fn is_fixed(&self) -> bool { self.is_fixed }

    pub fn involves(&self, body: BodyHandle) -> bool {
        self.a == body || self.b == body
    }

    /// One relaxation pass. `a` and `b` must be the bodies this link names,
    /// in order.
    ///
    /// Coincident ends have no direction to push along; for a fixed link that
    /// is reported as [`PhysicsError::DivideByZero`].
    pub fn relax(&self, a: &mut Body<F>, b: &mut Body<F>) -> Result<(), PhysicsError> {
        let axis = a.position() - b.position();
        let dist = axis.length();

        if !self.is_fixed && dist <= self.length {
            return Ok(());
        }

        let n = axis.try_div(dist)?;
        let d = (self.length - dist) / F::from_f32(LINK_RELAXATION_DIVISOR);
        a.displace(n.scale(d));
        b.displace(-n.scale(d));
        Ok(())
    }
}
