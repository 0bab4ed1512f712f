//! Step observer trait for monitoring solver progress.

/// Trait for observing solver steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after every free body has been integrated and contained.
    fn on_integrate(&mut self) {}

    /// Called once per sub-step after the body loop, with the number of
    /// contact corrections it applied.
    fn on_contacts(&mut self, _resolved: usize) {}

    /// Called after the link pass, with the number of links skipped because
    /// their ends coincided.
    fn on_links_relaxed(&mut self, _skipped: usize) {}

    /// Called when a step (all sub-steps) is complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
