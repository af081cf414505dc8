//! Shared utilities: frame timing and damped-spring steps.

/// Critically damped spring steps used by the orbit controller.
pub mod damping;
/// Frame delta measurement for the host loop.
pub mod frame_timing;
