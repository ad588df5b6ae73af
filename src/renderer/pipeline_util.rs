use crate::gpu::texture::DEPTH_FORMAT;

/// Opaque color target for the surface format.
pub fn surface_fragment_targets(
    format: wgpu::TextureFormat,
) -> [Option<wgpu::ColorTargetState>; 1] {
    [Some(wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState::REPLACE),
        write_mask: wgpu::ColorWrites::ALL,
    })]
}

/// Standard depth-stencil state used by all render pipelines.
pub fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Linear clear color from an sRGB triple.
pub fn clear_color(srgb: [f32; 3]) -> wgpu::Color {
    let [r, g, b] = crate::util::color::srgb_to_linear(srgb);
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_is_opaque_and_linear() {
        let c = clear_color([1.0, 0.5, 0.0]);
        assert_eq!(c.a, 1.0);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert!(c.g < 0.5);
    }
}
