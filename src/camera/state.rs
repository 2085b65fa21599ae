//! Camera state, control bounds and viewport

use nalgebra::{Matrix4, Point3, Vector3};

/// Live camera position. Orientation is implicit: the camera always
/// re-aims at the scene origin, see [`CameraState::view_matrix`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Point3<f32>,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 50.0),
        }
    }

    /// Distance from the scene origin.
    pub fn radius(&self) -> f32 {
        self.position.coords.norm()
    }

    /// Polar angle in the rotation plane.
    pub fn polar_angle(&self) -> f32 {
        self.position.y.atan2(self.position.x)
    }

    /// View matrix aimed at the scene origin, y-up.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &Point3::origin(), &Vector3::y())
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

/// Orbit control configuration shared by the gesture interpreter (zoom
/// range) and the per-frame orbit update (damping, angle limit).
#[derive(Clone, Copy, Debug)]
pub struct ControlBounds {
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping_factor: f32,
    pub max_polar_angle: f32,
}

impl Default for ControlBounds {
    fn default() -> Self {
        Self {
            min_distance: 10.0,
            max_distance: 200.0,
            damping_factor: 0.05,
            max_polar_angle: std::f32::consts::FRAC_PI_2,
        }
    }
}

/// Pixel-space viewport the hand coordinates are measured in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_sits_on_the_zoom_axis() {
        let camera = CameraState::default();
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 50.0));
        assert!((camera.radius() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn polar_angle_matches_atan2_of_xy() {
        let camera = CameraState {
            position: Point3::new(3.0, 4.0, 10.0),
        };
        assert!((camera.polar_angle() - 4.0f32.atan2(3.0)).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_keeps_the_origin_centered() {
        let camera = CameraState {
            position: Point3::new(30.0, 12.0, 40.0),
        };
        let eye_space = camera.view_matrix() * Point3::origin().to_homogeneous();
        // The origin projects onto the view axis: x = y = 0, z = -distance.
        assert!(eye_space[0].abs() < 1e-4);
        assert!(eye_space[1].abs() < 1e-4);
        assert!((eye_space[2] + camera.radius()).abs() < 1e-3);
    }
}
