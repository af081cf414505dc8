use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Camera", inline)]
#[serde(default)]
/// Orbit camera projection, distance limits and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Default floor for the orbit distance. Restored whenever the camera
    /// is reset or the sun is focused.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub min_distance: f32,
    /// Ceiling for the orbit distance.
    #[schemars(
        title = "Max Distance",
        range(min = 1000.0, max = 500000.0),
        extend("step" = 1000.0)
    )]
    pub max_distance: f32,
    /// Approximate time in seconds for animated transitions to settle.
    #[schemars(title = "Smooth Time", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub smooth_time: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Truck Speed", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub truck_speed: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 200_000.0,
            min_distance: 200.0,
            max_distance: 100_000.0,
            smooth_time: 0.8,
            truck_speed: 1.0,
            rotate_speed: 1.0,
            zoom_speed: 2.0,
        }
    }
}
