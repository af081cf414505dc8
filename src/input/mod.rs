//! Input handling: platform-agnostic event types and the processor that
//! turns them into orbit camera gestures.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera gestures.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{CameraGesture, InputProcessor};
