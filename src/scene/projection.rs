//! Perspective projection of world-space graph geometry
//!
//! Builds the frame's view-projection from the live camera, maps node
//! positions to clip space for vertex building and to screen pixels for
//! the label overlay.

use nalgebra::{Matrix4, Perspective3, Point3};

use crate::camera::{CameraState, Viewport};

/// Vertical field of view, radians.
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const NEAR: f32 = 1.0;
pub const FAR: f32 = 1000.0;

/// A point after projection, before the perspective divide is discarded:
/// `w` is the clip-space depth used to size billboards.
#[derive(Clone, Copy, Debug)]
pub struct ClipPoint {
    pub x: f32,
    pub y: f32,
    pub w: f32,
}

pub struct FrameProjection {
    view_proj: Matrix4<f32>,
    /// projection[1][1]; converts world-space height at depth w into
    /// clip-space height.
    focal_scale: f32,
    viewport: Viewport,
}

impl FrameProjection {
    pub fn new(camera: &CameraState, viewport: Viewport) -> Self {
        let projection = Perspective3::new(viewport.aspect(), FOV_Y, NEAR, FAR);
        let proj_matrix = *projection.as_matrix();
        Self {
            view_proj: proj_matrix * camera.view_matrix(),
            focal_scale: proj_matrix[(1, 1)],
            viewport,
        }
    }

    /// Clip-space position; `None` when the point is behind the camera.
    pub fn to_clip(&self, world: [f32; 3]) -> Option<ClipPoint> {
        let homogeneous =
            self.view_proj * Point3::new(world[0], world[1], world[2]).to_homogeneous();
        let w = homogeneous[3];
        if w <= NEAR * 0.5 {
            return None;
        }
        Some(ClipPoint {
            x: homogeneous[0] / w,
            y: homogeneous[1] / w,
            w,
        })
    }

    /// Clip-space radius of a billboard with the given world-space radius
    /// at the given depth.
    pub fn billboard_radius(&self, world_radius: f32, w: f32) -> f32 {
        world_radius * self.focal_scale / w
    }

    /// Screen pixels (origin top-left) for the label overlay.
    pub fn to_screen(&self, clip: ClipPoint) -> (f32, f32) {
        (
            (clip.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - clip.y) * 0.5 * self.viewport.height,
        )
    }

    /// Pixel height of a billboard with the given world-space height at
    /// the given depth.
    pub fn billboard_height_px(&self, world_height: f32, w: f32) -> f32 {
        self.billboard_radius(world_height, w) * 0.5 * self.viewport.height
    }
}
