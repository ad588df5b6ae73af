use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;

/// Lighting configuration shared by the lit shaders.
/// NOTE: Must match the WGSL `LightingUniform` layout exactly (48 bytes)
///
/// WGSL layout (auto-padded):
///   spot_position: vec3<f32>   (offset 0,  align 16)
///   spot_cos_angle: f32        (offset 12)
///   spot_direction: vec3<f32>  (offset 16, align 16)
///   spot_intensity: f32        (offset 28)
///   ambient: vec3<f32>         (offset 32, align 16)
///   padding: f32               (offset 44)
///   Total: 48 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Spot light position in world space.
    pub spot_position: [f32; 3],
    /// Cosine of the cone half-angle.
    pub spot_cos_angle: f32,
    /// Normalized direction the spot light points in.
    pub spot_direction: [f32; 3],
    /// Diffuse intensity inside the cone.
    pub spot_intensity: f32,
    /// Linear ambient RGB.
    pub ambient: [f32; 3],
    /// Alignment padding.
    pub padding: f32,
}

impl LightingUniform {
    /// Uniform values for the given options.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let position = Vec3::from(options.spot_position);
        let direction = (Vec3::from(options.spot_target) - position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        Self {
            spot_position: position.to_array(),
            spot_cos_angle: options.spot_angle.to_radians().cos(),
            spot_direction: direction.to_array(),
            spot_intensity: options.spot_intensity,
            ambient: crate::util::color::srgb_to_linear(options.ambient),
            padding: 0.0,
        }
    }
}

/// Lighting uniform buffer and its bind group.
pub struct Lighting {
    /// CPU copy of the uniform.
    pub uniform: LightingUniform,
    /// Uniform buffer bound at group 1 of the lit pipeline.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the lighting uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the lighting uniform.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the lighting buffer from options.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = LightingUniform::from_options(options);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Lighting Bind Group"),
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Apply new options and upload if anything changed.
    pub fn update(&mut self, queue: &wgpu::Queue, options: &LightingOptions) {
        let uniform = LightingUniform::from_options(options);
        if uniform != self.uniform {
            self.uniform = uniform;
            queue.write_buffer(
                &self.buffer,
                0,
                bytemuck::cast_slice(&[self.uniform]),
            );
        }
    }
}
