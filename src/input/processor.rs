//! Converts raw platform events into orbit camera gestures.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held buttons, modifier keys). It is the only thing that sits between raw
//! window events and the orbit controller.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};

/// What a raw event means for the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraGesture {
    /// Orbit around the target by a drag delta in pixels.
    Rotate(Vec2),
    /// Truck the target by a drag delta in pixels.
    Pan(Vec2),
    /// Dolly by a scroll amount (positive = closer).
    Zoom(f32),
    /// Viewport resized.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Tracks cursor and button state across events.
///
/// Left drag orbits; right drag, middle drag or shift + left drag pans;
/// the wheel zooms.
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Last cursor position, `None` until the first move.
    last_cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    left_pressed: bool,
    /// Whether the right or middle button is currently held.
    pan_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any button that drags the camera is held.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.left_pressed || self.pan_pressed
    }

    /// Release all buttons, e.g. when the window loses focus mid-drag.
    pub fn release_mouse_state(&mut self) {
        self.left_pressed = false;
        self.pan_pressed = false;
    }

    /// Process a raw input event and return zero or one gestures.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraGesture> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.left_pressed = pressed,
                    MouseButton::Right | MouseButton::Middle => {
                        self.pan_pressed = pressed;
                    }
                }
                None
            }
            InputEvent::Scroll { delta } => Some(CameraGesture::Zoom(delta)),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::Resized { width, height } => {
                Some(CameraGesture::Resize { width, height })
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<CameraGesture> {
        let current = Vec2::new(x, y);
        let delta = current - self.last_cursor.replace(current)?;
        if delta == Vec2::ZERO {
            return None;
        }

        if self.pan_pressed || (self.left_pressed && self.shift_pressed) {
            Some(CameraGesture::Pan(delta))
        } else if self.left_pressed {
            Some(CameraGesture::Rotate(delta))
        } else {
            None
        }
    }
}
