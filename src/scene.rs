//! Read-only snapshots of the externally owned scene state.
//!
//! Selection, body positions and the surface-camera flag are owned by the
//! host (UI, orbit simulator). The camera code only ever borrows them.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::catalog::CelestialBody;

/// Body name → current world position. Filled asynchronously by the orbit
/// simulator, so a selected body may not have an entry yet.
pub type PositionMap = FxHashMap<String, Vec3>;

/// Externally owned surface-camera state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceCameraState {
    /// Whether the user asked for the first-person surface camera.
    pub active: bool,
    /// Picked point on the selected body's surface, in world space.
    pub surface_point: Option<Vec3>,
}

impl SurfaceCameraState {
    /// Surface camera requested at `point`.
    #[must_use]
    pub fn at(point: Vec3) -> Self {
        Self {
            active: true,
            surface_point: Some(point),
        }
    }
}

/// Everything the camera rig reads from the host in one call.
#[derive(Debug, Clone, Copy)]
pub struct SceneSnapshot<'a> {
    /// Currently selected body, if any.
    pub selected: Option<&'a CelestialBody>,
    /// Live body positions.
    pub positions: &'a PositionMap,
    /// Surface-camera request.
    pub surface: SurfaceCameraState,
    /// Current sun position (the reset camera frames it).
    pub sun_position: Vec3,
}

impl<'a> SceneSnapshot<'a> {
    /// Snapshot with nothing selected and the surface camera off.
    #[must_use]
    pub fn new(positions: &'a PositionMap) -> Self {
        Self {
            selected: None,
            positions,
            surface: SurfaceCameraState::default(),
            sun_position: Vec3::ZERO,
        }
    }

    /// Builder-style selection.
    #[must_use]
    pub fn with_selected(mut self, body: Option<&'a CelestialBody>) -> Self {
        self.selected = body;
        self
    }

    /// Builder-style surface-camera state.
    #[must_use]
    pub fn with_surface(mut self, surface: SurfaceCameraState) -> Self {
        self.surface = surface;
        self
    }

    /// Builder-style sun position.
    #[must_use]
    pub fn with_sun_position(mut self, sun_position: Vec3) -> Self {
        self.sun_position = sun_position;
        self
    }

    /// Position of the selected body, if both exist.
    #[must_use]
    pub fn selected_position(&self) -> Option<Vec3> {
        self.selected
            .and_then(|body| self.positions.get(&body.name).copied())
    }
}
