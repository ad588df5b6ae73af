use serde::{Deserialize, Serialize};

/// Color palette (sRGB components in `0..=1`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Clear color behind the scene.
    pub background: [f32; 3],
    /// Ground plane color.
    pub ground: [f32; 3],
    /// Disc color for positive charges.
    pub positive_charge: [f32; 3],
    /// Disc color for negative charges.
    pub negative_charge: [f32; 3],
    /// Field arrow color.
    pub arrow: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: hex(0x00E1_FCFF),
            ground: hex(0x00CC_CCCC),
            positive_charge: hex(0x00FF_3333),
            negative_charge: hex(0x0033_33FF),
            arrow: hex(0x00FF_0000),
        }
    }
}

/// Split a `0xRRGGBB` literal into normalized components.
fn hex(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literals_split_into_channels() {
        assert_eq!(hex(0x00FF_0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex(0x0000_00FF), [0.0, 0.0, 1.0]);
        let grey = hex(0x00CC_CCCC);
        assert!(grey.iter().all(|c| (*c - 0.8).abs() < 1e-6));
    }
}
