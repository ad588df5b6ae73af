use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Dimensions of the generated scene meshes.
pub struct GeometryOptions {
    /// Side length of the square ground plane.
    pub ground_size: f32,
    /// Radius of the disc drawn under each charge.
    pub charge_radius: f32,
    /// Segments around each charge disc.
    pub charge_segments: u32,
    /// Height of the charge discs above the ground plane.
    pub charge_z_offset: f32,
    /// Arrow shaft radius.
    pub shaft_radius: f32,
    /// Arrow head length as a fraction of arrow length.
    pub head_length_ratio: f32,
    /// Arrow head radius as a fraction of head length.
    pub head_width_ratio: f32,
    /// Sides of the arrow shaft prism and head cone.
    pub arrow_sides: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            ground_size: 50.0,
            charge_radius: 1.0,
            charge_segments: 32,
            charge_z_offset: 0.01,
            shaft_radius: 0.012,
            head_length_ratio: 0.2,
            head_width_ratio: 0.3,
            arrow_sides: 6,
        }
    }
}
