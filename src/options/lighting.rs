use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// A single spot light over the ground plane plus flat ambient light.
pub struct LightingOptions {
    /// Spot light position.
    pub spot_position: [f32; 3],
    /// Point the spot light aims at.
    pub spot_target: [f32; 3],
    /// Cone half-angle in degrees.
    pub spot_angle: f32,
    /// Diffuse intensity inside the cone.
    pub spot_intensity: f32,
    /// Ambient RGB contribution.
    pub ambient: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            spot_position: [0.0, 0.0, 30.0],
            spot_target: [0.0, 0.0, 5.0],
            spot_angle: 60.0,
            spot_intensity: 1.0,
            // #404040
            ambient: [0.251, 0.251, 0.251],
        }
    }
}
