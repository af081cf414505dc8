use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// First-person surface camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Surface Camera", inline)]
#[serde(default)]
pub struct SurfaceOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance. Tiny so the ground right under the
    /// viewer is not clipped.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Height above the picked surface point at which the camera is
    /// mounted when surface mode is entered.
    #[schemars(title = "Eye Height", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub height_above_surface: f32,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            fovy: 70.0,
            znear: 0.000_01,
            zfar: 1000.0,
            height_above_surface: 0.1,
        }
    }
}
