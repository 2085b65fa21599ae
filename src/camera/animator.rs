//! Camera animator
//!
//! Runs once per rendered frame regardless of how often new gesture
//! targets arrive. Interpolates the live camera toward the latest target
//! by a fixed fraction per frame, which converges exponentially instead
//! of stepping at a fixed rate.

use super::state::CameraState;
use super::target::CameraTarget;

/// Fraction of the remaining rotation error closed per frame.
pub const ROTATION_SMOOTHING: f32 = 0.1;
/// Fraction of the remaining zoom error closed per frame.
pub const ZOOM_SMOOTHING: f32 = 0.2;

pub struct CameraAnimator {
    rotation_smoothing: f32,
    zoom_smoothing: f32,
}

impl CameraAnimator {
    pub fn new() -> Self {
        Self {
            rotation_smoothing: ROTATION_SMOOTHING,
            zoom_smoothing: ZOOM_SMOOTHING,
        }
    }

    /// Advance the camera one frame toward `target`. With both fields
    /// `None` this is a no-op and manual orbit control is authoritative.
    pub fn tick(&self, camera: &mut CameraState, target: &CameraTarget) {
        if let Some(rotation) = target.rotation {
            let current = camera.polar_angle();
            let next = lerp(current, rotation, self.rotation_smoothing);
            // Radius held constant across the reprojection.
            let radius = camera.radius();
            camera.position.x = radius * next.cos();
            camera.position.y = radius * next.sin();
        }

        if let Some(zoom) = target.zoom {
            camera.position.z = lerp(camera.position.z, zoom, self.zoom_smoothing);
        }
    }
}

impl Default for CameraAnimator {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn empty_target_leaves_the_camera_untouched() {
        let animator = CameraAnimator::new();
        let mut camera = CameraState {
            position: Point3::new(12.0, -7.0, 33.0),
        };
        let before = camera.position;
        animator.tick(&mut camera, &CameraTarget::default());
        assert_eq!(camera.position, before);
    }

    #[test]
    fn rotation_converges_geometrically() {
        let animator = CameraAnimator::new();
        let mut camera = CameraState {
            position: Point3::new(50.0, 0.0, 0.0),
        };
        let target = CameraTarget {
            rotation: Some(1.0),
            zoom: None,
        };

        // One tick closes exactly 10% of the angular error.
        animator.tick(&mut camera, &target);
        assert!((camera.polar_angle() - 0.1).abs() < 1e-5);

        for _ in 0..100 {
            animator.tick(&mut camera, &target);
        }
        assert!(
            (camera.polar_angle() - 1.0).abs() < 1e-3,
            "constant target must converge within a bounded number of frames"
        );
    }

    #[test]
    fn zoom_converges_to_the_target() {
        let animator = CameraAnimator::new();
        let mut camera = CameraState::new();
        let target = CameraTarget {
            rotation: None,
            zoom: Some(86.0),
        };

        // One tick closes exactly 20% of the zoom error.
        animator.tick(&mut camera, &target);
        assert!((camera.position.z - (50.0 + 0.2 * 36.0)).abs() < 1e-4);

        for _ in 0..100 {
            animator.tick(&mut camera, &target);
        }
        assert!((camera.position.z - 86.0).abs() < 1e-3);
    }

    #[test]
    fn rotation_only_target_does_not_move_zoom() {
        let animator = CameraAnimator::new();
        let mut camera = CameraState {
            position: Point3::new(50.0, 0.0, 42.0),
        };
        animator.tick(
            &mut camera,
            &CameraTarget {
                rotation: Some(0.5),
                zoom: None,
            },
        );
        assert_eq!(camera.position.z, 42.0);
    }
}
