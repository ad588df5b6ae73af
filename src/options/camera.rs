use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection, initial pose and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial eye position (also the reset pose).
    pub eye: [f32; 3],
    /// Initial orbit target.
    pub target: [f32; 3],
    /// Rotation sensitivity multiplier.
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    pub zoom_speed: f32,
    /// Closest the eye may get to the target.
    pub min_distance: f32,
    /// Farthest the eye may get from the target.
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 200.0,
            eye: [20.0, 20.0, 50.0],
            target: [0.0, 0.0, 5.0],
            rotate_speed: 0.5,
            pan_speed: 0.5,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 150.0,
        }
    }
}
