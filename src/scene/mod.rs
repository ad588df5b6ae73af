//! CPU-side scene: the meshes the renderer uploads.
//!
//! A [`Scene`] is rebuilt from scratch whenever the charges or the options
//! change. It never touches the GPU; [`crate::renderer`] owns the buffers.

/// Vertex type, triangle meshes and primitive builders.
pub mod mesh;

pub use mesh::{ArrowStyle, Mesh, Vertex};

use crate::field::{FieldGrid, PointCharge, Polarity};
use crate::options::Options;
use crate::util::color::srgb_to_linear;

/// Meshes for one frame's worth of static geometry, grouped by pipeline.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Ground plane (lit).
    pub ground: Mesh,
    /// One disc per charge (lit).
    pub charges: Mesh,
    /// One arrow per non-singular grid sample (unlit).
    pub field: Mesh,
    /// Number of arrows in `field`.
    pub arrow_count: usize,
}

impl Scene {
    /// Build all meshes for `charges` under `options`.
    #[must_use]
    pub fn build(charges: &[PointCharge], options: &Options) -> Self {
        let geometry = &options.geometry;
        let colors = &options.colors;

        let mut ground = Mesh::default();
        ground.add_square(
            geometry.ground_size,
            0.0,
            srgb_to_linear(colors.ground),
        );

        let mut discs = Mesh::default();
        for charge in charges {
            let color = match charge.polarity {
                Polarity::Positive => colors.positive_charge,
                Polarity::Negative => colors.negative_charge,
            };
            discs.add_disc(
                charge.position.extend(geometry.charge_z_offset),
                geometry.charge_radius,
                geometry.charge_segments,
                srgb_to_linear(color),
            );
        }

        let grid = FieldGrid::from_options(&options.field);
        let arrows = grid.arrows(
            charges,
            options.field.arrow_scale,
            options.field.z_offset,
        );
        let style = ArrowStyle {
            shaft_radius: geometry.shaft_radius,
            head_length_ratio: geometry.head_length_ratio,
            head_width_ratio: geometry.head_width_ratio,
            sides: geometry.arrow_sides,
        };
        let arrow_color = srgb_to_linear(colors.arrow);
        let mut field = Mesh::default();
        for arrow in &arrows {
            field.add_arrow(
                arrow.origin,
                arrow.direction,
                arrow.length,
                &style,
                arrow_color,
            );
        }

        log::debug!(
            "scene built: {} charges, {} arrows, {} triangles",
            charges.len(),
            arrows.len(),
            ground.triangle_count()
                + discs.triangle_count()
                + field.triangle_count()
        );

        Self {
            ground,
            charges: discs,
            field,
            arrow_count: arrows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::dipole;

    #[test]
    fn reference_scene_has_every_arrow() {
        let scene = Scene::build(&dipole(), &Options::default());
        assert_eq!(scene.arrow_count, 1600);
        assert_eq!(scene.ground.triangle_count(), 2);
        assert_eq!(scene.charges.triangle_count(), 64);
        // 6-sided arrows: shaft 12 + cone 6 + cap 6.
        assert_eq!(scene.field.triangle_count(), 1600 * 24);
    }

    #[test]
    fn disc_colors_follow_polarity() {
        let options = Options::default();
        let scene = Scene::build(&dipole(), &options);
        let positive = srgb_to_linear(options.colors.positive_charge);
        let negative = srgb_to_linear(options.colors.negative_charge);
        let center_pos = scene
            .charges
            .vertices
            .iter()
            .find(|v| v.position[0] == 5.0 && v.position[1] == 0.0)
            .map(|v| v.color);
        let center_neg = scene
            .charges
            .vertices
            .iter()
            .find(|v| v.position[0] == -5.0 && v.position[1] == 0.0)
            .map(|v| v.color);
        assert_eq!(center_pos, Some(positive));
        assert_eq!(center_neg, Some(negative));
    }

    #[test]
    fn discs_sit_above_the_ground() {
        let scene = Scene::build(&dipole(), &Options::default());
        assert!(scene.charges.vertices.iter().all(|v| v.position[2] == 0.01));
        assert!(scene.ground.vertices.iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn no_charges_means_no_arrows() {
        let scene = Scene::build(&[], &Options::default());
        assert_eq!(scene.arrow_count, 0);
        assert!(scene.field.is_empty());
        assert!(scene.charges.is_empty());
        assert!(!scene.ground.is_empty());
    }
}
