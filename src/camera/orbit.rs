use glam::{Vec2, Vec3};

use crate::options::CameraOptions;

/// Keeps the polar angle off the poles so `look_at` never degenerates.
const POLAR_EPSILON: f32 = 1e-3;

/// Radians of orbit per pixel of drag at `rotate_speed = 1`.
const ROTATE_RADIANS_PER_PIXEL: f32 = 0.01;

/// Fraction of the orbit distance panned per pixel at `pan_speed = 1`.
const PAN_FRACTION_PER_PIXEL: f32 = 0.002;

/// Orbit camera with +Z as world up.
///
/// The eye sits on a sphere around `target`: `azimuth` is measured in the
/// XY plane from +X, `polar` from +Z.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
    home_eye: Vec3,
    home_target: Vec3,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitCamera {
    /// Orbit placed at the configured initial eye/target.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut orbit = Self {
            target: Vec3::ZERO,
            distance: 1.0,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            home_eye: Vec3::from(options.eye),
            home_target: Vec3::from(options.target),
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        };
        orbit.reset();
        orbit
    }

    /// Current eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_p * cos_a, sin_p * sin_a, cos_p)
    }

    /// Current orbit target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Move the eye to `eye` while looking at `target`.
    pub fn look_from(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        self.target = target;
        self.distance = offset
            .length()
            .clamp(self.min_distance, self.max_distance);
        self.azimuth = offset.y.atan2(offset.x);
        let cos_polar = if offset.length_squared() > 0.0 {
            (offset.z / offset.length()).clamp(-1.0, 1.0)
        } else {
            1.0
        };
        self.polar = cos_polar
            .acos()
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
    }

    /// Return to the configured initial pose.
    pub fn reset(&mut self) {
        self.look_from(self.home_eye, self.home_target);
    }

    /// Orbit by a mouse drag of `delta` pixels. Dragging right swings the
    /// view to the right; dragging down tilts toward the top-down view.
    pub fn rotate(&mut self, delta: Vec2) {
        let step = self.rotate_speed * ROTATE_RADIANS_PER_PIXEL;
        self.azimuth -= delta.x * step;
        self.polar = (self.polar - delta.y * step)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
    }

    /// Slide the target (and eye) in the view plane by `delta` pixels.
    pub fn pan(&mut self, delta: Vec2) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Z).normalize_or_zero();
        let up = right.cross(forward);
        let scale = self.pan_speed * PAN_FRACTION_PER_PIXEL * self.distance;
        self.target += (right * -delta.x + up * delta.y) * scale;
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn orbit() -> OrbitCamera {
        OrbitCamera::from_options(&CameraOptions::default())
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-3);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-3);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-3);
    }

    #[test]
    fn starts_at_configured_pose() {
        let orbit = orbit();
        assert_vec_eq(orbit.eye(), Vec3::new(20.0, 20.0, 50.0));
        assert_vec_eq(orbit.target(), Vec3::new(0.0, 0.0, 5.0));
        let expected = 2825.0_f32.sqrt();
        assert_relative_eq!(orbit.distance(), expected, epsilon = 1e-4);
    }

    #[test]
    fn rotation_preserves_distance_to_target() {
        let mut orbit = orbit();
        let d = orbit.distance();
        orbit.rotate(Vec2::new(120.0, -45.0));
        assert_relative_eq!(
            (orbit.eye() - orbit.target()).length(),
            d,
            epsilon = 1e-3
        );
        assert_vec_eq(orbit.target(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn vertical_rotation_stops_short_of_the_pole() {
        let mut orbit = orbit();
        orbit.rotate(Vec2::new(0.0, 1.0e5));
        let offset = (orbit.eye() - orbit.target()).normalize();
        assert!(offset.z < 1.0);
        assert!(offset.truncate().length() > 0.0);
    }

    #[test]
    fn zoom_scales_and_clamps_distance() {
        let mut orbit = orbit();
        let d = orbit.distance();
        orbit.zoom(1.0);
        assert_relative_eq!(orbit.distance(), d * 0.9, epsilon = 1e-4);

        for _ in 0..200 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.distance(), 1.0);
        for _ in 0..200 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.distance(), 150.0);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut orbit = orbit();
        let offset_before = orbit.eye() - orbit.target();
        orbit.pan(Vec2::new(40.0, -25.0));
        let offset_after = orbit.eye() - orbit.target();
        assert!(orbit.target() != Vec3::new(0.0, 0.0, 5.0));
        assert_vec_eq(offset_before, offset_after);
    }

    #[test]
    fn reset_restores_initial_pose() {
        let mut orbit = orbit();
        orbit.rotate(Vec2::new(300.0, 80.0));
        orbit.pan(Vec2::new(-10.0, 10.0));
        orbit.zoom(2.0);
        orbit.reset();
        assert_eq!(orbit, self::orbit());
    }
}
