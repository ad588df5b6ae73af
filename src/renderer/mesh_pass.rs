//! Shared indexed-mesh draw-pass abstraction.
//!
//! `MeshPass` owns the vertex and index buffers for one [`Mesh`] and knows
//! how to draw them with whatever pipeline the caller has bound. Pipelines
//! are shared: the ground and the charge discs both go through the lit one.

use crate::error::EfieldError;
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::renderer::pipeline_util;
use crate::scene::{Mesh, Vertex};

/// Create a standard indexed-mesh render pipeline.
///
/// Culling is off: every scene surface is viewed from both sides.
pub(crate) fn create_mesh_pipeline(
    context: &RenderContext,
    shader_composer: &mut ShaderComposer,
    label: &str,
    (source, file_path): (&str, &str),
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> Result<wgpu::RenderPipeline, EfieldError> {
    let shader =
        shader_composer.compose(&context.device, label, source, file_path)?;

    let pipeline_layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} Layout")),
            bind_group_layouts,
            push_constant_ranges: &[],
        },
    );

    Ok(context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::surface_fragment_targets(
                    context.format(),
                ),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        }))
}

/// An indexed-mesh draw pass: vertex buffer + index buffer.
pub(crate) struct MeshPass {
    vertex_buffer: DynamicBuffer,
    index_buffer: DynamicBuffer,
    pub index_count: u32,
}

impl MeshPass {
    /// Create a pass with initial mesh data.
    pub fn new(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        Self {
            vertex_buffer: DynamicBuffer::new_with_data(
                device,
                &format!("{label} Vertices"),
                &mesh.vertices,
                wgpu::BufferUsages::VERTEX,
            ),
            index_buffer: DynamicBuffer::new_with_data(
                device,
                &format!("{label} Indices"),
                &mesh.indices,
                wgpu::BufferUsages::INDEX,
            ),
            index_count: mesh.indices.len() as u32,
        }
    }

    /// Replace the mesh data, growing the buffers if needed.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        mesh: &Mesh,
    ) {
        let _ = self.vertex_buffer.write(device, queue, &mesh.vertices);
        let _ = self.index_buffer.write(device, queue, &mesh.indices);
        self.index_count = mesh.indices.len() as u32;
    }

    /// Set vertex and index buffers and draw.
    ///
    /// Caller must set the pipeline and bind groups before calling this.
    pub fn draw_indexed(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        render_pass.set_vertex_buffer(0, self.vertex_buffer.buffer().slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.buffer().slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
