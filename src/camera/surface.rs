use glam::Vec3;

use crate::camera::core::{Camera, CameraUniform};
use crate::options::SurfaceOptions;

/// First-person camera standing on a body's surface.
///
/// It has no controller of its own: the director moves it every frame
/// while surface mode is active.
pub struct SurfaceCamera {
    camera: Camera,
    height_above_surface: f32,
}

impl SurfaceCamera {
    /// Camera with the projection from `options`, parked at the origin.
    #[must_use]
    pub fn new(options: &SurfaceOptions) -> Self {
        Self {
            camera: Camera::new(
                Vec3::ZERO,
                Vec3::NEG_Z,
                options.fovy,
                options.znear,
                options.zfar,
            ),
            height_above_surface: options.height_above_surface,
        }
    }

    /// Replace projection and eye height.
    pub fn apply_options(&mut self, options: &SurfaceOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.height_above_surface = options.height_above_surface;
    }

    /// Initial placement on entering surface mode: slightly above the
    /// picked point so the near plane clears the ground.
    pub fn mount(&mut self, surface_point: Vec3) {
        let eye = surface_point + Vec3::Y * self.height_above_surface;
        self.camera.eye = eye;
        self.camera.target = eye + Vec3::NEG_Z;
        self.camera.up = Vec3::Y;
    }

    /// Move the eye. The look direction is kept.
    pub fn set_position(&mut self, position: Vec3) {
        let forward = self.camera.forward();
        self.camera.eye = position;
        self.camera.target = position + forward;
    }

    /// Turn toward `target`. A target at the eye itself is ignored.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.camera.eye).try_normalize() else {
            return;
        };
        self.camera.target = target;
        // Standing on a pole looks straight along Y; pick another up axis
        // so the view matrix stays well defined.
        self.camera.up = if forward.cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// The current passive pose.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// GPU snapshot of the current pose.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(&self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_first_person_projection() {
        let surface = SurfaceCamera::new(&SurfaceOptions::default());
        assert_eq!(surface.camera().fovy, 70.0);
        assert_eq!(surface.camera().zfar, 1000.0);
        assert!(surface.camera().znear < 1e-4);
    }

    #[test]
    fn mount_lifts_eye_above_point() {
        let mut surface = SurfaceCamera::new(&SurfaceOptions::default());
        surface.mount(Vec3::new(10.0, 2.0, -3.0));
        assert!(surface
            .camera()
            .eye
            .abs_diff_eq(Vec3::new(10.0, 2.1, -3.0), 1e-6));
    }

    #[test]
    fn set_position_then_look_at() {
        let mut surface = SurfaceCamera::new(&SurfaceOptions::default());
        surface.set_position(Vec3::new(0.0, 5.0, 0.0));
        surface.look_at(Vec3::ZERO);
        assert_eq!(surface.camera().eye, Vec3::new(0.0, 5.0, 0.0));
        assert!(surface.camera().forward().abs_diff_eq(Vec3::NEG_Y, 1e-6));
        assert_eq!(surface.camera().up, Vec3::Z);
        assert!(!surface.camera().build_matrix().is_nan());
    }

    #[test]
    fn look_at_own_eye_is_ignored() {
        let mut surface = SurfaceCamera::new(&SurfaceOptions::default());
        surface.set_position(Vec3::ONE);
        let before = surface.camera().target;
        surface.look_at(Vec3::ONE);
        assert_eq!(surface.camera().target, before);
    }
}
