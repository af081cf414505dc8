//! Camera system for the solar-system view.
//!
//! An orbit controller with damped transitions, a first-person surface
//! camera, and the director that decides where they point.

/// Orbit camera controller with rotation, pan, zoom and damped transitions.
pub mod controller;
/// The controller capability and the directives issued through it.
pub mod controls;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Selection- and frame-driven camera direction.
pub mod director;
/// First-person camera locked to a body's surface.
pub mod surface;
