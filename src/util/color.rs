//! sRGB ↔ linear conversion for option colors.

/// Convert one sRGB-encoded channel to linear.
#[must_use]
pub fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB color (as stored in options) to linear RGB.
#[must_use]
pub fn srgb_to_linear(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(srgb_channel_to_linear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_fixed() {
        let [r, g, b] = srgb_to_linear([0.0, 1.0, 0.0]);
        assert_eq!(r, 0.0);
        assert_relative_eq!(g, 1.0, epsilon = 1e-6);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn mid_grey_darkens() {
        assert_relative_eq!(srgb_channel_to_linear(0.5), 0.214, epsilon = 1e-3);
        assert_relative_eq!(srgb_channel_to_linear(0.02), 0.02 / 12.92);
    }
}
