//! Error types for physics operations.

use crate::solver::{BodyHandle, LinkHandle};

/// Errors that can occur during physics operations.
///
/// Vector-versus-scalar operand mix-ups are ruled out by the type system,
/// so there is no runtime type-mismatch variant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    /// A scalar division by zero, or a direction taken from a zero-length vector.
    #[error("division by zero (zero scalar or zero-length vector)")]
    DivideByZero,
    /// Radius must be positive and finite.
    #[error("radius must be positive and finite")]
    InvalidRadius,
    /// Link length must be non-negative and finite.
    #[error("link length must be non-negative and finite")]
    InvalidLinkLength,
    /// Time step must be non-negative and finite.
    #[error("time step must be non-negative and finite")]
    InvalidTimeStep,
    /// Both ends of a link name the same body.
    #[error("a link cannot join {0:?} to itself")]
    SameBody(BodyHandle),
    /// The handle does not name a live body in this solver.
    #[error("no body for {0:?}")]
    BodyNotFound(BodyHandle),
    /// The handle does not name a live link in this solver.
    #[error("no link for {0:?}")]
    LinkNotFound(LinkHandle),
}
