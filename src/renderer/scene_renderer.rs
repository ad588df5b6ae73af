//! Draws a [`Scene`]: lit ground and charges, then the unlit field arrows.

use crate::error::EfieldError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, LAMBERT_SHADER, UNLIT_SHADER};
use crate::renderer::mesh_pass::{create_mesh_pipeline, MeshPass};
use crate::scene::Scene;

/// Bind groups shared by every pass in a frame.
pub struct DrawBindGroups<'a> {
    /// Camera uniform (group 0).
    pub camera: &'a wgpu::BindGroup,
    /// Lighting uniform (group 1 of the lit pipeline).
    pub lighting: &'a wgpu::BindGroup,
}

/// GPU-side scene: two pipelines and one mesh pass per scene layer.
pub struct SceneRenderer {
    lit_pipeline: wgpu::RenderPipeline,
    unlit_pipeline: wgpu::RenderPipeline,
    ground: MeshPass,
    charges: MeshPass,
    field: MeshPass,
}

impl SceneRenderer {
    /// Build pipelines and upload the initial scene.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::Shader`] if a mesh shader fails to compose.
    pub fn new(
        context: &RenderContext,
        shader_composer: &mut ShaderComposer,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        scene: &Scene,
    ) -> Result<Self, EfieldError> {
        let lit_pipeline = create_mesh_pipeline(
            context,
            shader_composer,
            "Lambert Mesh",
            (LAMBERT_SHADER, "raster/mesh/lambert.wgsl"),
            &[camera_layout, lighting_layout],
        )?;
        let unlit_pipeline = create_mesh_pipeline(
            context,
            shader_composer,
            "Unlit Mesh",
            (UNLIT_SHADER, "raster/mesh/unlit.wgsl"),
            &[camera_layout],
        )?;

        Ok(Self {
            lit_pipeline,
            unlit_pipeline,
            ground: MeshPass::new(&context.device, "Ground", &scene.ground),
            charges: MeshPass::new(&context.device, "Charges", &scene.charges),
            field: MeshPass::new(&context.device, "Field", &scene.field),
        })
    }

    /// Replace all mesh data with `scene`.
    pub fn upload(&mut self, context: &RenderContext, scene: &Scene) {
        let (device, queue) = (&context.device, &context.queue);
        self.ground.write(device, queue, &scene.ground);
        self.charges.write(device, queue, &scene.charges);
        self.field.write(device, queue, &scene.field);
    }

    /// Record draws into an open render pass. The field layer is skipped
    /// when `show_field` is false.
    pub fn draw(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        bind_groups: &DrawBindGroups<'_>,
        show_field: bool,
    ) {
        render_pass.set_bind_group(0, bind_groups.camera, &[]);

        render_pass.set_pipeline(&self.lit_pipeline);
        render_pass.set_bind_group(1, bind_groups.lighting, &[]);
        self.ground.draw_indexed(render_pass);
        self.charges.draw_indexed(render_pass);

        if show_field {
            render_pass.set_pipeline(&self.unlit_pipeline);
            self.field.draw_indexed(render_pass);
        }
    }
}
