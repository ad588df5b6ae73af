//! CPU mesh primitives: ground quad, charge disc, arrow glyph.
//!
//! All meshes are indexed triangle lists of [`Vertex`]. Builders append to
//! an existing [`Mesh`] so a whole layer becomes one vertex/index buffer pair.

use glam::{Quat, Vec3};

/// Vertex shared by the lit and unlit scene pipelines.
///
/// Must match `VertexInput` in the mesh shaders.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space normal.
    pub normal: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl Vertex {
    /// Vertex buffer layout: position, normal, color at locations 0..=2.
    #[must_use]
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

/// Arrow glyph proportions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Shaft radius in world units.
    pub shaft_radius: f32,
    /// Head length as a fraction of total length.
    pub head_length_ratio: f32,
    /// Head radius as a fraction of head length.
    pub head_width_ratio: f32,
    /// Sides of the shaft prism and head cone.
    pub sides: u32,
}

impl Mesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn base(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Two triangles over the four vertices starting at `base`.
    fn push_quad_indices(&mut self, base: u32) {
        self.indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }

    fn push(&mut self, position: Vec3, normal: Vec3, color: [f32; 3]) {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        });
    }

    /// Axis-aligned square in the plane `z = height`, facing +Z.
    pub fn add_square(&mut self, size: f32, height: f32, color: [f32; 3]) {
        let h = size * 0.5;
        let base = self.base();
        for (x, y) in [(-h, -h), (h, -h), (h, h), (-h, h)] {
            self.push(Vec3::new(x, y, height), Vec3::Z, color);
        }
        self.push_quad_indices(base);
    }

    /// Filled disc in the plane `z = center.z`, facing +Z, as a triangle fan.
    pub fn add_disc(
        &mut self,
        center: Vec3,
        radius: f32,
        segments: u32,
        color: [f32; 3],
    ) {
        let segments = segments.max(3);
        let base = self.base();
        self.push(center, Vec3::Z, color);
        for i in 0..segments {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            let (s, c) = theta.sin_cos();
            self.push(center + Vec3::new(c, s, 0.0) * radius, Vec3::Z, color);
        }
        for i in 0..segments {
            let a = base + 1 + i;
            let b = base + 1 + (i + 1) % segments;
            self.indices.extend_from_slice(&[base, a, b]);
        }
    }

    /// Arrow from `origin` along unit `direction`: a prism shaft and a cone
    /// head whose tip lands at `origin + direction * length`.
    pub fn add_arrow(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        length: f32,
        style: &ArrowStyle,
        color: [f32; 3],
    ) {
        if length <= 0.0 {
            return;
        }
        let sides = style.sides.max(3);
        let head_length = length * style.head_length_ratio;
        let head_radius = head_length * style.head_width_ratio;
        let shaft_length = length - head_length;

        // Built along +X, then rotated onto `direction`.
        let rotation = Quat::from_rotation_arc(Vec3::X, direction);
        let ring = |i: u32| {
            let theta = i as f32 / sides as f32 * std::f32::consts::TAU;
            let (s, c) = theta.sin_cos();
            Vec3::new(0.0, c, s)
        };

        // Shaft: open prism with per-side flat normals.
        if shaft_length > 0.0 {
            for i in 0..sides {
                let n0 = ring(i);
                let n1 = ring(i + 1);
                let normal = rotation * (n0 + n1).normalize();
                let base = self.base();
                let corners = [
                    (0.0, n0),
                    (shaft_length, n0),
                    (shaft_length, n1),
                    (0.0, n1),
                ];
                for (x, n) in corners {
                    let local = Vec3::new(x, 0.0, 0.0) + n * style.shaft_radius;
                    self.push(origin + rotation * local, normal, color);
                }
                self.push_quad_indices(base);
            }
        }

        // Head: cone sides plus a base cap.
        let tip = origin + direction * length;
        let head_base = Vec3::new(shaft_length, 0.0, 0.0);
        for i in 0..sides {
            let r0 = ring(i);
            let r1 = ring(i + 1);
            let normal = rotation * (r0 + r1 + Vec3::X).normalize();
            let base = self.base();
            for r in [r0, r1] {
                let local = head_base + r * head_radius;
                self.push(origin + rotation * local, normal, color);
            }
            self.push(tip, normal, color);
            self.indices.extend_from_slice(&[base, base + 1, base + 2]);
        }
        let cap_center = self.base();
        self.push(origin + rotation * head_base, -direction, color);
        for i in 0..sides {
            self.push(
                origin + rotation * (head_base + ring(i) * head_radius),
                -direction,
                color,
            );
        }
        for i in 0..sides {
            let a = cap_center + 1 + i;
            let b = cap_center + 1 + (i + 1) % sides;
            self.indices.extend_from_slice(&[cap_center, b, a]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RED: [f32; 3] = [1.0, 0.0, 0.0];

    fn style() -> ArrowStyle {
        ArrowStyle {
            shaft_radius: 0.01,
            head_length_ratio: 0.2,
            head_width_ratio: 0.3,
            sides: 6,
        }
    }

    fn indices_in_range(mesh: &Mesh) -> bool {
        let n = mesh.vertices.len() as u32;
        mesh.indices.iter().all(|&i| i < n)
    }

    #[test]
    fn vertex_is_36_bytes() {
        assert_eq!(size_of::<Vertex>(), 36);
        assert_eq!(Vertex::buffer_layout().array_stride, 36);
    }

    #[test]
    fn square_spans_requested_size() {
        let mut mesh = Mesh::default();
        mesh.add_square(50.0, 0.0, RED);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        let max_x = mesh
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert_eq!(max_x, 25.0);
    }

    #[test]
    fn disc_has_one_triangle_per_segment() {
        let mut mesh = Mesh::default();
        mesh.add_disc(Vec3::new(5.0, 0.0, 0.01), 1.0, 32, RED);
        assert_eq!(mesh.vertices.len(), 33);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(indices_in_range(&mesh));
        for v in &mesh.vertices[1..] {
            let p = Vec3::from(v.position);
            assert_relative_eq!(
                (p - Vec3::new(5.0, 0.0, 0.01)).length(),
                1.0,
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn arrow_tip_lands_at_length() {
        let mut mesh = Mesh::default();
        let origin = Vec3::new(1.0, 2.0, 0.001);
        let dir = Vec3::new(0.6, -0.8, 0.0);
        mesh.add_arrow(origin, dir, 0.5, &style(), RED);
        assert!(indices_in_range(&mesh));

        let farthest = mesh
            .vertices
            .iter()
            .map(|v| (Vec3::from(v.position) - origin).dot(dir))
            .fold(f32::MIN, f32::max);
        assert_relative_eq!(farthest, 0.5, epsilon = 1e-5);
        // Shaft + cone sides + cap.
        assert_eq!(mesh.triangle_count(), 6 * 2 + 6 + 6);
    }

    #[test]
    fn arrow_works_for_direction_opposite_build_axis() {
        let mut mesh = Mesh::default();
        mesh.add_arrow(Vec3::ZERO, Vec3::NEG_X, 1.0, &style(), RED);
        let min_x = mesh
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MAX, f32::min);
        assert_relative_eq!(min_x, -1.0, epsilon = 1e-5);
        assert!(mesh
            .vertices
            .iter()
            .all(|v| v.position.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn zero_length_arrow_adds_nothing() {
        let mut mesh = Mesh::default();
        mesh.add_arrow(Vec3::ZERO, Vec3::X, 0.0, &style(), RED);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
    }
}
