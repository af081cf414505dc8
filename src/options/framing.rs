use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the orbit camera frames the sun, a focused body, or the whole
/// system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Framing", inline)]
#[serde(default)]
pub struct FramingOptions {
    /// Eye offset from the sun used by the overview (reset) camera.
    #[schemars(skip)]
    pub reset_offset: [f32; 3],
    /// Focus distance as a multiple of the body's scaled radius. The
    /// distance floor is set to half of the resulting distance.
    #[schemars(title = "Focus Distance", range(min = 2.0, max = 20.0), extend("step" = 0.5))]
    pub focus_distance_factor: f32,
    /// Orbit distance used when the sun itself is selected.
    #[schemars(title = "Sun Distance", range(min = 50.0, max = 2000.0), extend("step" = 10.0))]
    pub sun_distance: f32,
    /// Whether selection/reset transitions are animated.
    #[schemars(title = "Animate Transitions")]
    pub animate: bool,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            reset_offset: [-2000.0, 1000.0, 1000.0],
            focus_distance_factor: 4.0,
            sun_distance: 200.0,
            animate: true,
        }
    }
}
