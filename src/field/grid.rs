use glam::{Vec2, Vec3};

use super::coulomb::{electric_field, PointCharge};
use crate::options::FieldOptions;

/// Square sampling grid centered on the origin.
///
/// `resolution` points per axis span `[-half_extent, half_extent]`
/// inclusive, so the spacing is `2 * half_extent / (resolution - 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGrid {
    /// Samples per axis (at least 2).
    pub resolution: u32,
    /// Half the side length of the sampled square.
    pub half_extent: f32,
}

/// One arrow glyph derived from a field sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldArrow {
    /// Tail position in world space.
    pub origin: Vec3,
    /// Unit direction (z = 0).
    pub direction: Vec3,
    /// Arrow length in world units.
    pub length: f32,
    /// Field magnitude at the sample.
    pub magnitude: f32,
}

impl Default for FieldGrid {
    fn default() -> Self {
        Self {
            resolution: 40,
            half_extent: 15.0,
        }
    }
}

impl FieldGrid {
    /// Grid matching the sampling section of the field options.
    #[must_use]
    pub fn from_options(options: &FieldOptions) -> Self {
        Self {
            resolution: options.resolution,
            half_extent: options.half_extent,
        }
    }

    /// Coordinate of the `i`-th sample along either axis.
    #[must_use]
    pub fn coordinate(&self, i: u32) -> f32 {
        let n = self.resolution.max(2);
        i as f32 * 2.0 * self.half_extent / (n - 1) as f32 - self.half_extent
    }

    /// All sample points, x-major.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.resolution).flat_map(move |i| {
            (0..self.resolution)
                .map(move |j| Vec2::new(self.coordinate(i), self.coordinate(j)))
        })
    }

    /// Longest arrow drawn: one cell-width, `2 * half_extent / resolution`.
    #[must_use]
    pub fn max_arrow_length(&self) -> f32 {
        2.0 * self.half_extent / self.resolution.max(1) as f32
    }

    /// Evaluate the field at every grid point and derive the arrow glyphs.
    ///
    /// Arrow length is `min(max_arrow_length, |E| * arrow_scale)`. Samples
    /// with a zero or non-finite field produce no arrow.
    #[must_use]
    pub fn arrows(
        &self,
        charges: &[PointCharge],
        arrow_scale: f32,
        z_offset: f32,
    ) -> Vec<FieldArrow> {
        let cap = self.max_arrow_length();
        let n = self.resolution as usize;
        let mut arrows = Vec::with_capacity(n.saturating_mul(n));
        for p in self.points() {
            let e = electric_field(charges, p.x, p.y);
            if !e.is_finite() {
                log::warn!(
                    "skipping singular field sample at ({}, {})",
                    p.x,
                    p.y
                );
                continue;
            }
            let magnitude = e.length();
            if magnitude == 0.0 {
                continue;
            }
            arrows.push(FieldArrow {
                origin: Vec3::new(p.x, p.y, z_offset),
                direction: (e / magnitude).extend(0.0),
                length: cap.min(magnitude * arrow_scale),
                magnitude,
            });
        }
        arrows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::coulomb::{dipole, Polarity};
    use approx::assert_relative_eq;

    #[test]
    fn default_grid_spans_thirty_unit_square() {
        let grid = FieldGrid::default();
        assert_eq!(grid.coordinate(0), -15.0);
        assert_relative_eq!(grid.coordinate(39), 15.0, epsilon = 1e-5);
        assert_eq!(grid.points().count(), 1600);
        assert_relative_eq!(grid.max_arrow_length(), 0.75);
    }

    #[test]
    fn default_grid_never_lands_on_the_dipole() {
        let grid = FieldGrid::default();
        let charges = dipole();
        let arrows = grid.arrows(&charges, 10.0, 0.001);
        assert_eq!(arrows.len(), 1600);
        assert!(arrows.iter().all(|a| a.length.is_finite()));
    }

    #[test]
    fn arrow_length_is_capped_at_one_cell() {
        let grid = FieldGrid::default();
        let arrows = grid.arrows(&dipole(), 10.0, 0.001);
        let cap = grid.max_arrow_length();
        for a in &arrows {
            assert!(a.length <= cap + 1e-6);
            assert_relative_eq!(a.direction.length(), 1.0, epsilon = 1e-5);
            assert_eq!(a.direction.z, 0.0);
            assert_eq!(a.origin.z, 0.001);
        }
        // Far corners are weak enough to be scaled, not capped.
        let corner = arrows
            .iter()
            .find(|a| a.origin.x == -15.0 && a.origin.y == -15.0)
            .map(|a| (a.length, a.magnitude));
        let Some((length, magnitude)) = corner else {
            panic!("corner sample missing");
        };
        assert!(length < cap);
        assert_relative_eq!(length, magnitude * 10.0, max_relative = 1e-6);
    }

    #[test]
    fn singular_and_zero_samples_are_skipped() {
        // Three-point grid with half extent 5 hits x = -5, 0, 5 exactly.
        let grid = FieldGrid {
            resolution: 3,
            half_extent: 5.0,
        };
        let charges = [PointCharge::new(5.0, 5.0, Polarity::Positive)];
        let arrows = grid.arrows(&charges, 10.0, 0.0);
        assert_eq!(arrows.len(), 8);

        let balanced = [
            PointCharge::new(-5.0, 0.0, Polarity::Positive),
            PointCharge::new(5.0, 0.0, Polarity::Positive),
        ];
        let arrows = grid.arrows(&balanced, 10.0, 0.0);
        assert!(arrows
            .iter()
            .all(|a| a.origin.truncate() != Vec2::ZERO));
    }
}
