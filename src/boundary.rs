//! Circular container that keeps bodies inside it.

use crate::body::Body;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// A circle every free body is clamped into.
///
/// Unlike links this is a hard constraint: a body that protrudes is put back
/// on the rim in a single application.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryConstraint<F: Float> {
    pub center: Vec2<F>,
    pub radius: F,
}

impl<F: Float> BoundaryConstraint<F> {
    /// Fails with [`PhysicsError::InvalidRadius`] unless `radius` is positive
    /// and finite. The fields stay public and are not re-checked.
    pub fn new(center: Vec2<F>, radius: F) -> Result<Self, PhysicsError> {
        if !radius.is_finite() || radius <= F::zero() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(BoundaryConstraint { center, radius })
    }

    /// Clamp `body` inside the circle. Static bodies are skipped.
    ///
    /// A body wider than the container sitting exactly on its center has no
    /// direction to be pushed along and yields [`PhysicsError::DivideByZero`].
    pub fn apply(&self, body: &mut Body<F>) -> Result<(), PhysicsError> {
        if body.is_static() {
            return Ok(());
        }
        let to_obj = body.position() - self.center;
        let limit = self.radius - body.radius();
        if to_obj.length() > limit {
            let n = to_obj.normalize()?;
            body.place(self.center + n.scale(limit));
        }
        Ok(())
    }

    /// True when the whole body lies inside, within `tolerance`.
    pub fn contains(&self, body: &Body<F>, tolerance: F) -> bool {
        body.position().distance(self.center) <= self.radius - body.radius() + tolerance
    }

    /// Axis-aligned bounding box `(min, max)`, for drawing.
    pub fn bounds(&self) -> (Vec2<F>, Vec2<F>) {
        let extent = Vec2::splat(self.radius);
        (self.center - extent, self.center + extent)
    }
}
