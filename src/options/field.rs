use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Field sampling grid and arrow scaling.
pub struct FieldOptions {
    /// Samples per axis.
    pub resolution: u32,
    /// Half the side length of the sampled square.
    pub half_extent: f32,
    /// World units of arrow length per unit of field magnitude (before the
    /// one-cell cap).
    pub arrow_scale: f32,
    /// Height of the arrows above the ground plane.
    pub z_offset: f32,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            resolution: 40,
            half_extent: 15.0,
            arrow_scale: 10.0,
            z_offset: 0.001,
        }
    }
}
