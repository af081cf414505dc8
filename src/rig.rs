//! The camera rig: both cameras, the director, and the input processor
//! behind one set of explicit notifications.
//!
//! The host owns selection, positions and the surface flag. Whenever one of
//! them changes it calls the matching notification with a fresh
//! [`SceneSnapshot`]; once per rendered frame it calls
//! [`CameraRig::frame`]. Nothing is polled and nothing is shared.
//!
//! ```ignore
//! let mut rig = CameraRig::new(&options, &catalog);
//! let mut timing = FrameTiming::default();
//! loop {
//!     let snapshot = SceneSnapshot::new(&positions)
//!         .with_selected(selected)
//!         .with_surface(surface_state);
//!     if selection_changed {
//!         let _ = rig.selection_changed(&snapshot);
//!     }
//!     let _ = rig.positions_updated(&snapshot);
//!     let _ = rig.frame(timing.end_frame(), &snapshot);
//!     renderer.draw(&rig.active_uniform());
//! }
//! ```

use glam::Vec3;

use crate::camera::controller::OrbitController;
use crate::camera::controls::CameraDirective;
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::director::CameraDirector;
use crate::camera::surface::SurfaceCamera;
use crate::catalog::BodyCatalog;
use crate::input::{CameraGesture, InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::{SceneSnapshot, SurfaceCameraState};

/// Which camera owns positioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Orbit controller around a target (default).
    #[default]
    Orbit,
    /// First-person camera on the selected body's surface.
    Surface,
}

impl CameraMode {
    /// The mode follows the external `active` flag, nothing else.
    #[must_use]
    pub const fn from_state(surface: &SurfaceCameraState) -> Self {
        if surface.active {
            Self::Surface
        } else {
            Self::Orbit
        }
    }
}

/// Owns the orbit and surface cameras and routes host notifications to
/// the [`CameraDirector`].
pub struct CameraRig {
    orbit: OrbitController,
    surface: SurfaceCamera,
    director: CameraDirector,
    input: InputProcessor,
    mode: CameraMode,
    /// Surface point the surface camera was last mounted at.
    mounted_at: Option<Vec3>,
}

impl CameraRig {
    /// Rig in orbit mode with cameras configured from `options`.
    #[must_use]
    pub fn new(options: &Options, catalog: &BodyCatalog) -> Self {
        Self {
            orbit: OrbitController::new(&options.camera),
            surface: SurfaceCamera::new(&options.surface),
            director: CameraDirector::new(options, catalog.size_scale_factor()),
            input: InputProcessor::new(),
            mode: CameraMode::Orbit,
            mounted_at: None,
        }
    }

    /// Push new options to every component.
    pub fn apply_options(&mut self, options: &Options) {
        self.orbit.apply_options(&options.camera);
        self.surface.apply_options(&options.surface);
        self.director.apply_options(options);
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Follow the surface flag. Leaving a mode drops the surface mount and
    /// any half-finished drag.
    fn sync_mode(&mut self, surface: &SurfaceCameraState) {
        let mode = CameraMode::from_state(surface);
        if mode != self.mode {
            log::info!("camera mode {:?} -> {mode:?}", self.mode);
            self.mode = mode;
            self.mounted_at = None;
            self.input.release_mouse_state();
        }
    }

    fn issue(&mut self, snapshot: &SceneSnapshot<'_>) -> Option<CameraDirective> {
        self.sync_mode(&snapshot.surface);
        if self.mode == CameraMode::Surface {
            log::trace!("surface camera active, orbit directive skipped");
            return None;
        }
        self.director.on_selection_changed(
            snapshot.selected,
            snapshot.positions,
            snapshot.sun_position,
            &mut self.orbit,
        )
    }

    /// The selection changed: reset to the overview or focus the new body.
    pub fn selection_changed(
        &mut self,
        snapshot: &SceneSnapshot<'_>,
    ) -> Option<CameraDirective> {
        self.issue(snapshot)
    }

    /// New body positions arrived. Re-targets the selected body so the
    /// orbit camera follows it; does nothing without a selection.
    pub fn positions_updated(
        &mut self,
        snapshot: &SceneSnapshot<'_>,
    ) -> Option<CameraDirective> {
        if snapshot.selected.is_none() {
            return None;
        }
        self.issue(snapshot)
    }

    /// The sun moved. Re-frames the overview; does nothing while a body is
    /// selected.
    pub fn sun_moved(
        &mut self,
        snapshot: &SceneSnapshot<'_>,
    ) -> Option<CameraDirective> {
        if snapshot.selected.is_some() {
            return None;
        }
        self.issue(snapshot)
    }

    /// Explicit return to the overview around the snapshot's sun, e.g.
    /// from a click on the sun. Skipped while the surface camera is active.
    pub fn reset_camera(
        &mut self,
        snapshot: &SceneSnapshot<'_>,
    ) -> Option<CameraDirective> {
        self.sync_mode(&snapshot.surface);
        if self.mode == CameraMode::Surface {
            return None;
        }
        let directive = self.director.reset_directive(snapshot.sun_position);
        log::debug!("camera reset: {directive:?}");
        directive.apply(&mut self.orbit);
        Some(directive)
    }

    /// Per-frame tick. Re-evaluates the mode, then either drives the
    /// surface camera or advances the orbit controller's transition.
    /// Returns whether the active camera moved.
    pub fn frame(&mut self, dt: f32, snapshot: &SceneSnapshot<'_>) -> bool {
        self.sync_mode(&snapshot.surface);

        match self.mode {
            CameraMode::Surface => {
                if let Some(point) = snapshot.surface.surface_point {
                    if self.mounted_at != Some(point) {
                        self.surface.mount(point);
                        self.mounted_at = Some(point);
                    }
                }
                self.director.on_frame_surface_update(
                    &snapshot.surface,
                    snapshot.selected,
                    snapshot.positions,
                    &mut self.surface,
                )
            }
            CameraMode::Orbit => self.orbit.update(dt),
        }
    }

    /// Feed a raw input event. Orbit gestures are ignored in surface mode;
    /// resizes always apply. Returns whether a camera changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let Some(gesture) = self.input.handle_event(event) else {
            return false;
        };
        if let CameraGesture::Resize { width, height } = gesture {
            self.orbit.resize(width, height);
            self.surface.resize(width, height);
            return true;
        }
        if self.mode == CameraMode::Surface {
            return false;
        }
        match gesture {
            CameraGesture::Rotate(delta) => self.orbit.rotate(delta),
            CameraGesture::Pan(delta) => self.orbit.pan(delta),
            CameraGesture::Zoom(delta) => self.orbit.zoom(delta),
            CameraGesture::Resize { .. } => {}
        }
        true
    }

    /// Pose of the camera that currently owns positioning. The surface
    /// camera only takes over once it has a surface point to stand on.
    #[must_use]
    pub fn active_camera(&self) -> &Camera {
        match (self.mode, self.mounted_at) {
            (CameraMode::Surface, Some(_)) => self.surface.camera(),
            _ => self.orbit.camera(),
        }
    }

    /// GPU snapshot of [`active_camera`](Self::active_camera).
    #[must_use]
    pub fn active_uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self.active_camera())
    }

    /// The orbit controller.
    #[must_use]
    pub const fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// The surface camera.
    #[must_use]
    pub const fn surface_camera(&self) -> &SurfaceCamera {
        &self.surface
    }
}
