use glam::{Mat3, Quat, Vec2, Vec3};

use crate::camera::controls::CameraControls;
use crate::camera::core::{Camera, CameraUniform};
use crate::options::CameraOptions;
use crate::util::damping::{smooth_damp, smooth_damp_vec3};

/// Radians of orbit per pixel of drag at `rotate_speed = 1`.
const ROTATE_PER_PIXEL: f32 = 0.005;
/// Fraction of the current distance panned per pixel at `truck_speed = 1`.
const PAN_PER_PIXEL: f32 = 0.001;
/// Fractional distance change per scroll unit at `zoom_speed = 1`.
const ZOOM_PER_UNIT: f32 = 0.05;
/// Below this the transition counts as finished and snaps to its goal.
const SETTLE_EPSILON: f32 = 1e-3;
/// Settle tolerance per unit of magnitude. f32 spacing grows with the
/// value, so far from the origin a fixed epsilon is never reached.
const SETTLE_RELATIVE: f32 = 1e-5;

/// Tolerance for a channel whose goal has the given magnitude.
fn settle_tolerance(magnitude: f32) -> f32 {
    SETTLE_EPSILON.max(magnitude.abs() * SETTLE_RELATIVE)
}

/// Orbit camera: the eye sits on a sphere around a focus point and eases
/// toward goal values set by directives or user input.
///
/// The eye is `focus + orientation * Z * distance`; `orientation * Y` is up.
pub struct OrbitController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    goal_orientation: Quat,
    goal_distance: f32,
    goal_focus: Vec3,

    // Orientation eases by slerping from `from_orientation` as progress
    // goes 0 -> 1.
    from_orientation: Quat,
    orientation_progress: f32,
    orientation_velocity: f32,
    distance_velocity: f32,
    focus_velocity: Vec3,

    min_distance: f32,
    max_distance: f32,
    smooth_time: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,

    camera: Camera,
}

impl OrbitController {
    /// Controller looking at the origin from +Z at the default floor
    /// distance.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let distance = options.min_distance.max(1.0);
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, distance),
            Vec3::ZERO,
            options.fovy,
            options.znear,
            options.zfar,
        );

        let mut controller = Self {
            orientation: Quat::IDENTITY,
            distance,
            focus_point: Vec3::ZERO,
            goal_orientation: Quat::IDENTITY,
            goal_distance: distance,
            goal_focus: Vec3::ZERO,
            from_orientation: Quat::IDENTITY,
            orientation_progress: 1.0,
            orientation_velocity: 0.0,
            distance_velocity: 0.0,
            focus_velocity: Vec3::ZERO,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            smooth_time: options.smooth_time,
            rotate_speed: options.rotate_speed,
            pan_speed: options.truck_speed,
            zoom_speed: options.zoom_speed,
            camera,
        };
        controller.update_camera_pos();
        controller
    }

    /// Replace projection, limits and sensitivities. Pose is kept, though
    /// the goal distance is re-clamped to the new limits.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.max_distance = options.max_distance;
        self.smooth_time = options.smooth_time;
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.truck_speed;
        self.zoom_speed = options.zoom_speed;
        self.set_min_distance(options.min_distance);
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance.max(self.min_distance))
    }

    /// Orientation whose +Z points along `dir`, keeping world +Y up where
    /// possible.
    fn look_rotation(dir: Vec3) -> Quat {
        let z = dir.normalize();
        let x = Vec3::Y.cross(z).try_normalize().unwrap_or(Vec3::X);
        let y = z.cross(x);
        Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
    }

    fn goal_eye(&self) -> Vec3 {
        self.goal_focus + self.goal_orientation * Vec3::Z * self.goal_distance
    }

    /// Point the goal orbit so the eye sits at `eye` around `goal_focus`.
    fn reorient_goal(&mut self, eye: Vec3, animate: bool) {
        let offset = eye - self.goal_focus;
        if let Some(dir) = offset.try_normalize() {
            self.goal_orientation = Self::look_rotation(dir);
            self.goal_distance = self.clamp_distance(offset.length());
        }
        if animate {
            self.from_orientation = self.orientation;
            self.orientation_progress = 0.0;
            self.orientation_velocity = 0.0;
        } else {
            self.snap_to_goal();
        }
    }

    fn snap_to_goal(&mut self) {
        self.orientation = self.goal_orientation;
        self.from_orientation = self.goal_orientation;
        self.orientation_progress = 1.0;
        self.orientation_velocity = 0.0;
        self.distance = self.goal_distance;
        self.distance_velocity = 0.0;
        self.focus_point = self.goal_focus;
        self.focus_velocity = Vec3::ZERO;
        self.update_camera_pos();
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Advance any in-flight transition by `dt` seconds. Returns `true`
    /// while the camera is still moving.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.is_animating() {
            return false;
        }
        if dt <= 0.0 {
            return true;
        }

        let previous_focus = self.focus_point;
        let previous_distance = self.distance;
        self.focus_point = smooth_damp_vec3(
            self.focus_point,
            self.goal_focus,
            &mut self.focus_velocity,
            self.smooth_time,
            dt,
        );
        self.distance = smooth_damp(
            self.distance,
            self.goal_distance,
            &mut self.distance_velocity,
            self.smooth_time,
            dt,
        );
        self.orientation_progress = smooth_damp(
            self.orientation_progress,
            1.0,
            &mut self.orientation_velocity,
            self.smooth_time,
            dt,
        );
        self.orientation = self
            .from_orientation
            .slerp(self.goal_orientation, self.orientation_progress);

        // A channel is done once it is within tolerance of its goal, or
        // once a step no longer changes it (rounding has absorbed the step).
        let focus_settled = self.focus_point == previous_focus
            || self.focus_point.distance(self.goal_focus)
                < settle_tolerance(self.goal_focus.abs().max_element());
        let distance_settled = self.distance == previous_distance
            || (self.distance - self.goal_distance).abs()
                < settle_tolerance(self.goal_distance);
        let settled = focus_settled
            && distance_settled
            && 1.0 - self.orientation_progress < SETTLE_EPSILON;
        if settled {
            self.snap_to_goal();
            return false;
        }

        self.update_camera_pos();
        true
    }

    /// Whether the current pose differs from the goal pose.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.focus_point != self.goal_focus
            || self.distance != self.goal_distance
            || self.orientation_progress < 1.0
    }

    /// Orbit around the focus point by `delta` pixels of drag.
    pub fn rotate(&mut self, delta: Vec2) {
        let scale = ROTATE_PER_PIXEL * self.rotate_speed;

        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * scale);

        // Vertical rotation around camera's right vector (after horizontal)
        let right = (horizontal * self.orientation) * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * scale);

        let rotation = vertical * horizontal;
        self.orientation = (rotation * self.orientation).normalize();
        self.goal_orientation = (rotation * self.goal_orientation).normalize();
        self.from_orientation = (rotation * self.from_orientation).normalize();
        self.update_camera_pos();
    }

    /// Truck the focus point by `delta` pixels of drag. Speed scales with
    /// distance so panning feels the same close up and far out.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let scale = PAN_PER_PIXEL * self.pan_speed * self.distance;

        let translation = right * (-delta.x * scale) + up * (delta.y * scale);

        self.focus_point += translation;
        self.goal_focus += translation;
        self.update_camera_pos();
    }

    /// Zoom by a scroll amount (positive = closer). The goal distance stays
    /// within the floor and ceiling; the eye eases there.
    pub fn zoom(&mut self, delta: f32) {
        let factor = 1.0 - delta * ZOOM_PER_UNIT * self.zoom_speed;
        self.goal_distance = self.clamp_distance(self.goal_distance * factor.max(0.01));
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Current eye-target distance.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Distance the controller is heading toward.
    #[must_use]
    pub const fn goal_distance(&self) -> f32 {
        self.goal_distance
    }

    /// Current focus point.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.focus_point
    }

    /// Focus point the controller is heading toward.
    #[must_use]
    pub const fn goal_target(&self) -> Vec3 {
        self.goal_focus
    }

    /// Eye position the controller is heading toward.
    #[must_use]
    pub fn goal_position(&self) -> Vec3 {
        self.goal_eye()
    }

    /// Distance ceiling.
    #[must_use]
    pub const fn max_distance(&self) -> f32 {
        self.max_distance
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

impl CameraControls for OrbitController {
    fn set_target(&mut self, target: Vec3, animate: bool) {
        // The eye stays put; only the look direction and distance change.
        let eye = self.goal_eye();
        self.goal_focus = target;
        self.reorient_goal(eye, animate);
    }

    fn set_position(&mut self, position: Vec3, animate: bool) {
        self.reorient_goal(position, animate);
    }

    fn dolly_to(&mut self, distance: f32, animate: bool) {
        self.goal_distance = self.clamp_distance(distance);
        if !animate {
            self.snap_to_goal();
        }
    }

    fn set_min_distance(&mut self, distance: f32) {
        self.min_distance = distance.max(0.0);
        self.goal_distance = self.clamp_distance(self.goal_distance);
    }

    fn min_distance(&self) -> f32 {
        self.min_distance
    }
}
