//! Turns selection and surface-mode state into camera commands.
//!
//! The director is stateless between calls: every decision is derived from
//! the snapshot passed in, so calling it again with the same inputs issues
//! the same directive. Bodies whose position has not arrived yet are
//! skipped; the next trigger retries naturally.

use glam::Vec3;

use crate::camera::controls::{CameraControls, CameraDirective, Placement};
use crate::camera::surface::SurfaceCamera;
use crate::catalog::CelestialBody;
use crate::options::Options;
use crate::scene::{PositionMap, SurfaceCameraState};

/// Computes orbit directives on selection changes and drives the surface
/// camera every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDirector {
    size_scale_factor: f32,
    default_min_distance: f32,
    reset_offset: Vec3,
    focus_distance_factor: f32,
    sun_distance: f32,
    animate: bool,
}

impl CameraDirector {
    /// Director using the framing from `options` and the catalog's size
    /// scale factor.
    #[must_use]
    pub fn new(options: &Options, size_scale_factor: f32) -> Self {
        let mut director = Self {
            size_scale_factor,
            default_min_distance: 0.0,
            reset_offset: Vec3::ZERO,
            focus_distance_factor: 0.0,
            sun_distance: 0.0,
            animate: true,
        };
        director.apply_options(options);
        director
    }

    /// Pick up new framing options.
    pub fn apply_options(&mut self, options: &Options) {
        self.default_min_distance = options.camera.min_distance;
        self.reset_offset = Vec3::from_array(options.framing.reset_offset);
        self.focus_distance_factor = options.framing.focus_distance_factor;
        self.sun_distance = options.framing.sun_distance;
        self.animate = options.framing.animate;
    }

    /// Orbit distance that frames a body of the given unscaled radius.
    #[must_use]
    pub fn optimal_distance(&self, radius: f32) -> f32 {
        radius * self.size_scale_factor * self.focus_distance_factor
    }

    /// Overview of the whole system from a fixed offset off the sun.
    #[must_use]
    pub fn reset_directive(&self, sun_position: Vec3) -> CameraDirective {
        CameraDirective {
            target: sun_position,
            placement: Placement::Position(sun_position + self.reset_offset),
            min_distance: self.default_min_distance,
            animate: self.animate,
        }
    }

    const fn sun_directive(&self) -> CameraDirective {
        CameraDirective {
            target: Vec3::ZERO,
            placement: Placement::Distance(self.sun_distance),
            min_distance: self.default_min_distance,
            animate: self.animate,
        }
    }

    /// Directive that frames `body`, or `None` while its position is
    /// unknown. The floor is half the framing distance so the user cannot
    /// zoom inside the body.
    #[must_use]
    pub fn focus_directive(
        &self,
        body: &CelestialBody,
        positions: &PositionMap,
    ) -> Option<CameraDirective> {
        if body.is_sun() {
            return Some(self.sun_directive());
        }
        let Some(&position) = positions.get(&body.name) else {
            log::trace!("no position for {} yet, skipping focus", body.name);
            return None;
        };
        let distance = self.optimal_distance(body.radius);
        Some(CameraDirective {
            target: position,
            placement: Placement::Distance(distance),
            min_distance: distance / 2.0,
            animate: self.animate,
        })
    }

    /// Directive for the current selection: reset when nothing is
    /// selected, otherwise focus the selected body.
    #[must_use]
    pub fn directive_for(
        &self,
        selected: Option<&CelestialBody>,
        positions: &PositionMap,
        sun_position: Vec3,
    ) -> Option<CameraDirective> {
        match selected {
            None => Some(self.reset_directive(sun_position)),
            Some(body) => self.focus_directive(body, positions),
        }
    }

    /// Compute and apply the directive for the current selection. Returns
    /// what was applied.
    pub fn on_selection_changed<C: CameraControls + ?Sized>(
        &self,
        selected: Option<&CelestialBody>,
        positions: &PositionMap,
        sun_position: Vec3,
        controls: &mut C,
    ) -> Option<CameraDirective> {
        let directive = self.directive_for(selected, positions, sun_position)?;
        log::debug!(
            "camera directive for {}: {directive:?}",
            selected.map_or("overview", |b| b.name.as_str())
        );
        directive.apply(controls);
        Some(directive)
    }

    /// Per-frame surface camera update. Places the camera at the body
    /// position plus the surface offset and looks at the body center.
    ///
    /// The offset is recomputed from the current inputs every frame, never
    /// cached. Returns whether the camera moved; it does nothing unless
    /// surface mode is active with a surface point, a selection, and a
    /// known position for the selection.
    pub fn on_frame_surface_update(
        &self,
        surface: &SurfaceCameraState,
        selected: Option<&CelestialBody>,
        positions: &PositionMap,
        camera: &mut SurfaceCamera,
    ) -> bool {
        if !surface.active {
            return false;
        }
        let (Some(surface_point), Some(body)) = (surface.surface_point, selected)
        else {
            return false;
        };
        let Some(&body_position) = positions.get(&body.name) else {
            return false;
        };

        let offset = surface_point - body_position;
        camera.set_position(body_position + offset);
        camera.look_at(body_position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::controls::tests::{Call, RecordingControls};
    use crate::catalog::{BodyCatalog, SUN};
    use crate::options::SurfaceOptions;

    fn director() -> CameraDirector {
        CameraDirector::new(&Options::default(), 10.0)
    }

    fn positions(entries: &[(&str, Vec3)]) -> PositionMap {
        entries
            .iter()
            .map(|(name, p)| ((*name).to_owned(), *p))
            .collect()
    }

    #[test]
    fn mars_example_distances() {
        let mars = CelestialBody::new("Mars", 0.53);
        let map = positions(&[("Mars", Vec3::new(300.0, 0.0, 40.0))]);
        let directive = director().focus_directive(&mars, &map).unwrap();
        assert_eq!(directive.target, Vec3::new(300.0, 0.0, 40.0));
        assert!((directive.distance().unwrap() - 21.2).abs() < 1e-4);
        assert!((directive.min_distance - 10.6).abs() < 1e-4);
        assert!(directive.animate);
    }

    #[test]
    fn every_body_frames_at_four_radii() {
        let catalog = BodyCatalog::default();
        let d = CameraDirector::new(&Options::default(), catalog.size_scale_factor());
        let map: PositionMap =
            catalog.iter().map(|b| (b.name.clone(), Vec3::X)).collect();
        for body in catalog.iter().filter(|b| !b.is_sun()) {
            let r = body.radius * catalog.size_scale_factor();
            let directive = d.focus_directive(body, &map).unwrap();
            assert!((directive.distance().unwrap() - 4.0 * r).abs() < 1e-3);
            assert!((directive.min_distance - 2.0 * r).abs() < 1e-3);
        }
    }

    #[test]
    fn sun_always_frames_origin() {
        let sun = CelestialBody::new(SUN, 5.0);
        let map = positions(&[(SUN, Vec3::new(7.0, 8.0, 9.0))]);
        for map_ref in [&PositionMap::default(), &map] {
            let directive = director().focus_directive(&sun, map_ref).unwrap();
            assert_eq!(directive.target, Vec3::ZERO);
            assert_eq!(directive.distance(), Some(200.0));
            assert_eq!(directive.min_distance, 200.0);
        }
    }

    #[test]
    fn deselect_resets_to_isometric_overview() {
        let sun_position = Vec3::new(5.0, 0.0, -5.0);
        let mut controls = RecordingControls::default();
        let directive = director()
            .on_selection_changed(None, &PositionMap::default(), sun_position, &mut controls)
            .unwrap();
        assert_eq!(directive.target, sun_position);
        assert_eq!(
            directive.placement,
            Placement::Position(Vec3::new(-1995.0, 1000.0, 995.0))
        );
        assert_eq!(
            controls.calls,
            vec![
                Call::MinDistance(200.0),
                Call::Target(sun_position, true),
                Call::Position(Vec3::new(-1995.0, 1000.0, 995.0), true),
            ]
        );
    }

    #[test]
    fn missing_position_is_skipped_then_retried() {
        let venus = CelestialBody::new("Venus", 0.95);
        let d = director();
        let mut controls = RecordingControls::default();

        let mut map = PositionMap::default();
        assert!(d
            .on_selection_changed(Some(&venus), &map, Vec3::ZERO, &mut controls)
            .is_none());
        assert!(controls.calls.is_empty());

        let _ = map.insert("Venus".to_owned(), Vec3::new(0.0, 0.0, 720.0));
        let directive = d
            .on_selection_changed(Some(&venus), &map, Vec3::ZERO, &mut controls)
            .unwrap();
        assert_eq!(directive.target, Vec3::new(0.0, 0.0, 720.0));
        assert!(controls.calls.contains(&Call::Target(Vec3::new(0.0, 0.0, 720.0), true)));
        assert_eq!(controls.min_distance, directive.min_distance);
    }

    #[test]
    fn framing_options_are_respected() {
        let mut options = Options::default();
        options.framing.focus_distance_factor = 6.0;
        options.framing.animate = false;
        let d = CameraDirector::new(&options, 1.0);
        let earth = CelestialBody::new("Earth", 2.0);
        let directive = d
            .focus_directive(&earth, &positions(&[("Earth", Vec3::Y)]))
            .unwrap();
        assert_eq!(directive.distance(), Some(12.0));
        assert_eq!(directive.min_distance, 6.0);
        assert!(!directive.animate);
    }

    fn surface_camera() -> SurfaceCamera {
        SurfaceCamera::new(&SurfaceOptions::default())
    }

    #[test]
    fn surface_update_places_camera_and_looks_at_body() {
        let earth = CelestialBody::new("Earth", 1.0);
        let body = Vec3::new(1000.0, 0.0, 0.0);
        let point = body + Vec3::new(0.0, 0.0, 10.0);
        let mut camera = surface_camera();
        let moved = director().on_frame_surface_update(
            &SurfaceCameraState::at(point),
            Some(&earth),
            &positions(&[("Earth", body)]),
            &mut camera,
        );
        assert!(moved);
        assert!(camera.camera().eye.abs_diff_eq(point, 1e-3));
        assert!(camera.camera().forward().abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn surface_camera_co_translates_with_body() {
        let earth = CelestialBody::new("Earth", 1.0);
        let offset = Vec3::new(0.0, 10.0, 0.5);
        let d = director();
        let mut camera = surface_camera();

        let p0 = Vec3::new(1000.0, 0.0, 0.0);
        let p1 = Vec3::new(995.0, 0.0, 99.0);
        let mut eyes = Vec::new();
        for p in [p0, p1] {
            // The host keeps the picked point attached to the body.
            let surface = SurfaceCameraState::at(p + offset);
            assert!(d.on_frame_surface_update(
                &surface,
                Some(&earth),
                &positions(&[("Earth", p)]),
                &mut camera,
            ));
            assert!(camera.camera().target.abs_diff_eq(p, 1e-4));
            eyes.push(camera.camera().eye);
        }
        assert!((eyes[1] - eyes[0]).abs_diff_eq(p1 - p0, 1e-3));
    }

    #[test]
    fn fixed_surface_point_keeps_eye_and_tracks_body() {
        let earth = CelestialBody::new("Earth", 1.0);
        let point = Vec3::new(1000.0, 10.0, 0.0);
        let d = director();
        let mut camera = surface_camera();
        for p in [Vec3::new(1000.0, 0.0, 0.0), Vec3::new(1001.0, 0.0, 1.0)] {
            assert!(d.on_frame_surface_update(
                &SurfaceCameraState::at(point),
                Some(&earth),
                &positions(&[("Earth", p)]),
                &mut camera,
            ));
            assert!(camera.camera().eye.abs_diff_eq(point, 1e-3));
            assert!(camera.camera().target.abs_diff_eq(p, 1e-4));
        }
    }

    #[test]
    fn surface_update_requires_all_inputs() {
        let earth = CelestialBody::new("Earth", 1.0);
        let map = positions(&[("Earth", Vec3::X)]);
        let d = director();
        let mut camera = surface_camera();
        let before = *camera.camera();

        let inactive = SurfaceCameraState {
            active: false,
            surface_point: Some(Vec3::Y),
        };
        let no_point = SurfaceCameraState {
            active: true,
            surface_point: None,
        };
        assert!(!d.on_frame_surface_update(&inactive, Some(&earth), &map, &mut camera));
        assert!(!d.on_frame_surface_update(&no_point, Some(&earth), &map, &mut camera));
        assert!(!d.on_frame_surface_update(
            &SurfaceCameraState::at(Vec3::Y),
            None,
            &map,
            &mut camera
        ));
        assert!(!d.on_frame_surface_update(
            &SurfaceCameraState::at(Vec3::Y),
            Some(&earth),
            &PositionMap::default(),
            &mut camera
        ));
        assert_eq!(*camera.camera(), before);
    }
}
