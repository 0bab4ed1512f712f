//! Circular Verlet bodies with implicit velocity.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// A circular point-mass integrated with position Verlet.
///
/// Velocity is never stored: it is `position - position_old`. Bodies carry no
/// identity of their own; the [`Solver`](crate::Solver) hands out a
/// [`BodyHandle`](crate::BodyHandle) when one is registered.
#[derive(Clone, Debug, PartialEq)]
pub struct Body<F: Float> {
    position: Vec2<F>,
    position_old: Vec2<F>,
    acceleration: Vec2<F>,
    radius: F,
    is_static: bool,
}

impl<F: Float> Body<F> {
    /// A free body at rest.
    pub fn new(position: Vec2<F>, radius: F) -> Result<Self, PhysicsError> {
        if !radius.is_finite() || radius <= F::zero() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(Body {
            position,
            position_old: position,
            acceleration: Vec2::zero(),
            radius,
            is_static: false,
        })
    }

    /// A body that only moves when explicitly repositioned.
    pub fn pinned(position: Vec2<F>, radius: F) -> Result<Self, PhysicsError> {
        let mut body = Self::new(position, radius)?;
        body.is_static = true;
        Ok(body)
    }

    /// Seed the implicit velocity (displacement per integration step).
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2<F>) -> Self {
        self.position_old = self.position - velocity;
        self
    }

    pub fn position(&self) -> Vec2<F> { self.position }
    pub fn position_old(&self) -> Vec2<F> { self.position_old }
    pub fn acceleration(&self) -> Vec2<F> { self.acceleration }
    pub fn radius(&self) -> F { self.radius }
    pub fn is_static(&self) -> bool { self.is_static }

    /// Displacement over the last integration step.
    pub fn velocity(&self) -> Vec2<F> {
        self.position - self.position_old
    }

    pub fn accelerate(&mut self, accel: Vec2<F>) {
        if !self.is_static {
            self.acceleration = self.acceleration + accel;
        }
    }

    /// One Verlet step of length `dt`. Static bodies are left untouched.
    pub fn integrate(&mut self, dt: F) {
        if self.is_static {
            return;
        }
        let velocity = self.position - self.position_old;
        self.position_old = self.position;
        self.position = self.position + velocity + self.acceleration.scale(dt * dt);
        self.acceleration = Vec2::zero();
    }

    /// Constraint correction. The old position is kept, so the correction
    /// feeds into the next implicit velocity.
    pub(crate) fn displace(&mut self, delta: Vec2<F>) {
        if !self.is_static {
            self.position = self.position + delta;
        }
    }

    /// Hard placement used by containment; keeps the old position.
    pub(crate) fn place(&mut self, position: Vec2<F>) {
        if !self.is_static {
            self.position = position;
        }
    }

    /// Teleport without introducing velocity. Works on static bodies too.
    pub fn move_to(&mut self, position: Vec2<F>) {
        self.position = position;
        self.position_old = position;
    }

    pub fn pin(&mut self) {
        self.is_static = true;
        self.position_old = self.position;
        self.acceleration = Vec2::zero();
    }

    /// Release a pinned body. It starts at rest.
    pub fn unpin(&mut self) {
        self.is_static = false;
        self.position_old = self.position;
    }

    /// Axis-aligned bounding box `(min, max)`, for drawing.
    pub fn bounds(&self) -> (Vec2<F>, Vec2<F>) {
        let extent = Vec2::splat(self.radius);
        (self.position - extent, self.position + extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_radius() {
        let origin = Vec2::new(0.0f32, 0.0);
        assert_eq!(Body::new(origin, 0.0), Err(PhysicsError::InvalidRadius));
        assert_eq!(Body::new(origin, -2.0), Err(PhysicsError::InvalidRadius));
        assert_eq!(Body::new(origin, f32::NAN), Err(PhysicsError::InvalidRadius));
        assert_eq!(Body::new(origin, f32::INFINITY), Err(PhysicsError::InvalidRadius));
    }

    #[test]
    fn integrate_moves_by_implicit_velocity() {
        let mut body = Body::new(Vec2::new(0.0f32, 0.0), 5.0)
            .unwrap()
            .with_velocity(Vec2::new(1.0, 0.0));
        assert_eq!(body.position_old(), Vec2::new(-1.0, 0.0));

        body.integrate(1.0);
        assert_eq!(body.position(), Vec2::new(1.0, 0.0));
        assert_eq!(body.position_old(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn integrate_consumes_acceleration() {
        let mut body = Body::new(Vec2::new(0.0f64, 0.0), 1.0).unwrap();
        body.accelerate(Vec2::new(0.0, 2.0));
        body.accelerate(Vec2::new(0.0, 2.0));
        assert_eq!(body.acceleration(), Vec2::new(0.0, 4.0));

        body.integrate(0.5);
        assert_eq!(body.position(), Vec2::new(0.0, 1.0));
        assert_eq!(body.acceleration(), Vec2::zero());
    }

    #[test]
    fn static_body_ignores_forces_and_corrections() {
        let mut body = Body::pinned(Vec2::new(5.0f32, 5.0), 1.0).unwrap();
        body.accelerate(Vec2::new(1000.0, 1000.0));
        body.integrate(1.0 / 60.0);
        body.displace(Vec2::new(3.0, 3.0));
        body.place(Vec2::new(0.0, 0.0));
        assert_eq!(body.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn move_to_clears_velocity() {
        let mut body = Body::new(Vec2::new(0.0f32, 0.0), 1.0)
            .unwrap()
            .with_velocity(Vec2::new(4.0, 4.0));
        body.move_to(Vec2::new(10.0, -3.0));
        assert_eq!(body.position(), Vec2::new(10.0, -3.0));
        assert_eq!(body.velocity(), Vec2::zero());
    }

    #[test]
    fn pin_then_unpin_starts_at_rest() {
        let mut body = Body::new(Vec2::new(1.0f32, 1.0), 1.0)
            .unwrap()
            .with_velocity(Vec2::new(2.0, 0.0));
        body.pin();
        assert!(body.is_static());
        body.unpin();
        assert!(!body.is_static());
        body.integrate(1.0);
        assert_eq!(body.position(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn seeded_velocity_is_dropped_on_unpin() {
        let mut body = Body::pinned(Vec2::new(0.0f32, 0.0), 1.0)
            .unwrap()
            .with_velocity(Vec2::new(5.0, 0.0));
        body.unpin();
        assert_eq!(body.velocity(), Vec2::zero());
        body.integrate(1.0);
        assert_eq!(body.position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn bounds_span_the_diameter() {
        let body = Body::new(Vec2::new(10.0f32, 20.0), 4.0).unwrap();
        assert_eq!(body.bounds(), (Vec2::new(6.0, 16.0), Vec2::new(14.0, 24.0)));
    }
}
