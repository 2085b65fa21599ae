//! Published camera target
//!
//! Written by the gesture interpreter on its own cadence, read every
//! rendered frame by the animator. The record is always replaced as a
//! whole, never mutated field-by-field, so a reader can only ever see a
//! complete update.

/// Desired camera rotation/zoom. `None` means no active gesture target:
/// the animator leaves that axis to manual orbit control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraTarget {
    pub rotation: Option<f32>,
    pub zoom: Option<f32>,
}

impl CameraTarget {
    pub fn is_empty(&self) -> bool {
        self.rotation.is_none() && self.zoom.is_none()
    }
}
