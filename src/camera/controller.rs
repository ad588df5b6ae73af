use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::orbit::OrbitCamera;
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Orbit controller plus the camera uniform buffer and bind group.
pub struct CameraController {
    orbit: OrbitCamera,

    /// Current camera (derived from the orbit after every change).
    pub camera: Camera,
    /// CPU copy of the uniform.
    pub uniform: CameraUniform,
    /// Uniform buffer bound at group 0 of every scene pipeline.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the camera uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the camera uniform.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Controller at the configured initial pose.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let orbit = OrbitCamera::from_options(options);
        let camera = Camera {
            eye: orbit.eye(),
            target: orbit.target(),
            up: Vec3::Z,
            aspect: context.config.width as f32
                / context.config.height.max(1) as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
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
                    label: Some("Camera Bind Group"),
                });

        Self {
            orbit,
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    fn sync_camera(&mut self) {
        self.camera.eye = self.orbit.eye();
        self.camera.target = self.orbit.target();
    }

    /// Upload the current camera to the uniform buffer.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&self.uniform));
    }

    /// Track a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Replace projection and control parameters. The pose is reset to the
    /// new initial eye/target.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.orbit = OrbitCamera::from_options(options);
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.sync_camera();
    }

    /// Orbit around the target.
    pub fn rotate(&mut self, delta: Vec2) {
        self.orbit.rotate(delta);
        self.sync_camera();
    }

    /// Pan in the view plane.
    pub fn pan(&mut self, delta: Vec2) {
        self.orbit.pan(delta);
        self.sync_camera();
    }

    /// Dolly toward or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        self.orbit.zoom(delta);
        self.sync_camera();
    }

    /// Return to the initial pose.
    pub fn reset(&mut self) {
        self.orbit.reset();
        self.sync_camera();
    }
}
