//! Configuration types for the physics solver.

use crate::boundary::BoundaryConstraint;
use crate::float::Float;
use crate::vec::Vec2;

/// Gravity used by [`SolverConfig::new`]: screen coordinates, y pointing down.
pub const DEFAULT_GRAVITY: (f32, f32) = (0.0, 1000.0);

/// Configuration for the solver.
///
/// # Builder Pattern
/// ```
/// use verlet2d::{BoundaryConstraint, SolverConfig, Vec2};
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_gravity(Vec2::new(0.0, 1000.0))
///     .with_sub_steps(8)
///     .with_boundary(BoundaryConstraint::new(Vec2::new(375.0, 335.0), 325.0)?);
/// # Ok::<(), verlet2d::PhysicsError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Acceleration applied to every free body each sub-step.
    pub gravity: Vec2<F>,
    /// Number of sub-steps per [`step`](crate::Solver::step). Higher is
    /// stiffer and more stable. Values below 1 are treated as 1. Default: 1.
    pub sub_steps: usize,
    /// Optional circular container. Default: none.
    pub boundary: Option<BoundaryConstraint<F>>,
}

impl<F: Float> SolverConfig<F> {
    pub fn new() -> Self {
        SolverConfig {
            gravity: Vec2::new(F::from_f32(DEFAULT_GRAVITY.0), F::from_f32(DEFAULT_GRAVITY.1)),
            sub_steps: 1,
            boundary: None,
        }
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the number of sub-steps. Zero is coerced to one.
    #[must_use]
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        if sub_steps == 0 {
            log::warn!("sub_steps must be at least 1; using 1");
        }
        self.sub_steps = sub_steps.max(1);
        self
    }

    #[must_use]
    pub fn with_boundary(mut self, boundary: BoundaryConstraint<F>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Sub-step count actually used when stepping.
    pub fn effective_sub_steps(&self) -> usize {
        self.sub_steps.max(1)
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sub_steps_coerced_to_one() {
        let config: SolverConfig<f32> = SolverConfig::new().with_sub_steps(0);
        assert_eq!(config.sub_steps, 1);

        let mut config: SolverConfig<f32> = SolverConfig::new();
        config.sub_steps = 0;
        assert_eq!(config.effective_sub_steps(), 1);
    }

    #[test]
    fn defaults() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert_eq!(config.gravity, Vec2::new(0.0, 1000.0));
        assert_eq!(config.sub_steps, 1);
        assert!(config.boundary.is_none());
    }
}
