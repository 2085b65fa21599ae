//! Damped orbit control for residual manual interaction
//!
//! Per-frame update in the conventional orbit-control shape: re-derive
//! spherical coordinates from the live position, apply the damped drag
//! and wheel velocities, clamp radius and polar angle into bounds, and
//! write the position back. The radius clamp also bounds any drift left
//! behind by the gesture animator's reprojection.

use super::state::{CameraState, ControlBounds};

/// Radians of azimuth/polar rotation per dragged pixel.
const ROTATE_SPEED: f32 = 0.005;
/// Distance units per wheel delta unit.
const ZOOM_SPEED: f32 = 0.05;
/// Keeps the polar angle off the pole where the view axis would align
/// with the up vector.
const POLAR_EPS: f32 = 1e-4;

pub struct OrbitControls {
    azimuth_velocity: f32,
    polar_velocity: f32,
    zoom_velocity: f32,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            azimuth_velocity: 0.0,
            polar_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }

    /// Pointer drag in pixels.
    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        self.azimuth_velocity -= dx * ROTATE_SPEED;
        self.polar_velocity -= dy * ROTATE_SPEED;
    }

    /// Wheel delta; positive moves the camera away from the scene.
    pub fn on_wheel(&mut self, delta: f32) {
        self.zoom_velocity += delta * ZOOM_SPEED;
    }

    /// Per-frame update. Runs after the gesture animator so manual input
    /// and bound clamping always apply to the final position.
    pub fn update(&mut self, camera: &mut CameraState, bounds: &ControlBounds) {
        let position = camera.position;
        let radius = position.coords.norm();
        if radius < f32::EPSILON {
            return;
        }

        // Spherical about +y: azimuth in the x-z plane, polar from the
        // up axis.
        let mut azimuth = position.x.atan2(position.z);
        let mut polar = (position.y / radius).clamp(-1.0, 1.0).acos();

        azimuth += self.azimuth_velocity;
        polar = (polar + self.polar_velocity).clamp(POLAR_EPS, bounds.max_polar_angle);
        let radius =
            (radius + self.zoom_velocity).clamp(bounds.min_distance, bounds.max_distance);

        let sin_polar = polar.sin();
        camera.position.x = radius * sin_polar * azimuth.sin();
        camera.position.y = radius * polar.cos();
        camera.position.z = radius * sin_polar * azimuth.cos();

        let decay = 1.0 - bounds.damping_factor;
        self.azimuth_velocity *= decay;
        self.polar_velocity *= decay;
        self.zoom_velocity *= decay;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn update_without_input_preserves_an_in_bounds_position() {
        let mut orbit = OrbitControls::new();
        let mut camera = CameraState {
            position: Point3::new(20.0, 10.0, 40.0),
        };
        let before = camera.position;
        orbit.update(&mut camera, &ControlBounds::default());
        assert!((camera.position - before).norm() < 1e-3);
    }

    #[test]
    fn radius_is_clamped_into_bounds() {
        let bounds = ControlBounds::default();
        let mut orbit = OrbitControls::new();

        let mut far = CameraState {
            position: Point3::new(0.0, 0.0, 500.0),
        };
        orbit.update(&mut far, &bounds);
        assert!((far.radius() - bounds.max_distance).abs() < 1e-3);

        let mut near = CameraState {
            position: Point3::new(0.0, 0.0, 2.0),
        };
        orbit.update(&mut near, &bounds);
        assert!((near.radius() - bounds.min_distance).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_never_exceeds_the_horizon_limit() {
        // Below the horizon (y < 0) gets clamped back to y = 0 by the
        // max polar angle.
        let mut orbit = OrbitControls::new();
        let mut camera = CameraState {
            position: Point3::new(0.0, -30.0, 40.0),
        };
        orbit.update(&mut camera, &ControlBounds::default());
        assert!(camera.position.y >= -1e-3);
    }

    #[test]
    fn drag_rotates_and_velocity_decays() {
        let bounds = ControlBounds::default();
        let mut orbit = OrbitControls::new();
        let mut camera = CameraState::new();

        orbit.on_drag(40.0, 0.0);
        let azimuth_before = camera.position.x.atan2(camera.position.z);
        orbit.update(&mut camera, &bounds);
        let azimuth_after = camera.position.x.atan2(camera.position.z);
        let first_step = azimuth_after - azimuth_before;
        assert!(first_step.abs() > 1e-4, "drag must rotate the camera");

        // Damping: the next frame's step is smaller but nonzero.
        orbit.update(&mut camera, &bounds);
        let second_step = camera.position.x.atan2(camera.position.z) - azimuth_after;
        assert!(second_step.abs() > 1e-6);
        assert!(second_step.abs() < first_step.abs());
    }

    #[test]
    fn wheel_changes_distance_within_bounds() {
        let bounds = ControlBounds::default();
        let mut orbit = OrbitControls::new();
        let mut camera = CameraState::new();

        orbit.on_wheel(100.0);
        orbit.update(&mut camera, &bounds);
        assert!(camera.radius() > 50.0);
        assert!(camera.radius() <= bounds.max_distance + 1e-3);
    }
}
