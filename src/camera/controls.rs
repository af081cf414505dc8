//! The camera-controller capability driven by the
//! [`CameraDirector`](super::director::CameraDirector), and the directives
//! it issues.

use glam::Vec3;

/// Operations an orbit-style camera controller exposes to the director.
///
/// Positions are world space. `animate = false` snaps immediately;
/// `animate = true` lets the controller ease toward the new goal over its
/// own smoothing time.
pub trait CameraControls {
    /// Move the point the camera orbits around.
    fn set_target(&mut self, target: Vec3, animate: bool);
    /// Move the eye, keeping the current target.
    fn set_position(&mut self, position: Vec3, animate: bool);
    /// Move along the view axis to `distance` from the target.
    fn dolly_to(&mut self, distance: f32, animate: bool);
    /// Floor for the eye-target distance.
    fn set_min_distance(&mut self, distance: f32);
    /// Current distance floor.
    fn min_distance(&self) -> f32;
}

/// Where the eye goes once the target is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Absolute eye position.
    Position(Vec3),
    /// Distance from the target along the current view axis.
    Distance(f32),
}

/// One camera instruction: look at `target`, place the eye, and bound how
/// close the user may zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDirective {
    /// Point to orbit around.
    pub target: Vec3,
    /// Eye placement relative to `target`.
    pub placement: Placement,
    /// New distance floor.
    pub min_distance: f32,
    /// Whether the controller should ease into the new pose.
    pub animate: bool,
}

impl CameraDirective {
    /// Apply to a controller. The floor goes first so a dolly toward a
    /// small body is not clamped by the previous, larger floor.
    pub fn apply<C: CameraControls + ?Sized>(&self, controls: &mut C) {
        controls.set_min_distance(self.min_distance);
        controls.set_target(self.target, self.animate);
        match self.placement {
            Placement::Position(position) => {
                controls.set_position(position, self.animate);
            }
            Placement::Distance(distance) => {
                controls.dolly_to(distance, self.animate);
            }
        }
    }

    /// The dolly distance, if this directive places the eye by distance.
    #[must_use]
    pub const fn distance(&self) -> Option<f32> {
        match self.placement {
            Placement::Distance(d) => Some(d),
            Placement::Position(_) => None,
        }
    }
}
