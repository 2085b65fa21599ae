//! Gesture interpreter
//!
//! Consumes one hand observation per detection cycle. While calibrating
//! it watches for a closed hand to capture the reference frame; once
//! calibrated it maps the index fingertip's displacement from that
//! reference to a target camera rotation, and its distance from the
//! viewport center to a target zoom.

use super::calibration::{CalibrationState, CalibrationStep, ReferenceFrame};
use super::observation::HandObservation;
use crate::camera::{CameraState, CameraTarget, ControlBounds, Viewport};

pub struct GestureInterpreter {
    state: CalibrationState,
    inverse_rotation: bool,
    prompt: Option<&'static str>,
    /// Last published target. Retained across cycles that emit nothing,
    /// so a dropped frame never snaps the camera back.
    target: CameraTarget,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self {
            state: CalibrationState::Idle,
            inverse_rotation: false,
            prompt: None,
            target: CameraTarget::default(),
        }
    }

    /// Enabling enters calibration; disabling clears the published target
    /// and hands the camera back to manual orbit control.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            if self.state == CalibrationState::Idle {
                self.state = CalibrationState::Calibrating(CalibrationStep::PromptCenterHand);
            }
        } else {
            self.state = CalibrationState::Idle;
            self.prompt = None;
            self.target = CameraTarget::default();
        }
    }

    pub fn set_inverse_rotation(&mut self, inverse: bool) {
        self.inverse_rotation = inverse;
    }

    pub fn state(&self) -> &CalibrationState {
        &self.state
    }

    /// Prompt for the calibration UI, if one is active.
    pub fn prompt(&self) -> Option<&'static str> {
        self.prompt
    }

    /// Run one interpretation cycle and return the published target.
    ///
    /// Only the first observation, if any, is used. An empty list means
    /// hand tracking was lost: the reference is discarded and calibration
    /// restarts, so tracking resumption cannot jump the camera off a
    /// stale reference.
    pub fn interpret(
        &mut self,
        observations: &[HandObservation],
        camera: &CameraState,
        viewport: Viewport,
        bounds: &ControlBounds,
    ) -> CameraTarget {
        if self.state == CalibrationState::Idle {
            return self.target;
        }

        let Some(observation) = observations.first() else {
            self.state = CalibrationState::Calibrating(CalibrationStep::PromptCenterHand);
            return self.target;
        };

        match self.state {
            CalibrationState::Calibrating(step) => {
                self.prompt = step.prompt();
                if hand_closed(observation) {
                    let tip = observation.index_tip();
                    self.state = CalibrationState::Calibrated(ReferenceFrame {
                        position: (tip.x, tip.y),
                        zoom: camera.position.z,
                    });
                    self.prompt = None;
                    // No target this cycle: the first delta is measured
                    // against the reference just captured.
                }
            }
            CalibrationState::Calibrated(reference) => {
                let tip = observation.index_tip();
                let dx = tip.x - reference.position.0;
                let dy = tip.y - reference.position.1;
                let sign = if self.inverse_rotation { -1.0 } else { 1.0 };

                self.target = CameraTarget {
                    rotation: Some(dy.atan2(dx) * sign),
                    zoom: Some(zoom_target(tip.x, tip.y, viewport, bounds)),
                };
            }
            CalibrationState::Idle => unreachable!("handled above"),
        }

        self.target
    }
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convexity heuristic for a closed hand: every thumb point strictly left
/// of and below its paired index-finger point (screen y grows downward).
/// Not biometric-accurate; misfires are acceptable UX.
fn hand_closed(observation: &HandObservation) -> bool {
    observation
        .thumb()
        .iter()
        .zip(observation.index_finger())
        .all(|(thumb, index)| thumb.x < index.x && thumb.y > index.y)
}

/// Map the fingertip's distance from the viewport center onto the zoom
/// range: center = closest, corner = farthest.
fn zoom_target(x: f32, y: f32, viewport: Viewport, bounds: &ControlBounds) -> f32 {
    let (cx, cy) = viewport.center();
    let to_center = ((cx - x).powi(2) + (cy - y).powi(2)).sqrt();
    let max_distance = (cx * cx + cy * cy).sqrt();
    let factor = (to_center / max_distance).clamp(0.0, 1.0);
    map_linear(factor, 0.0, 1.0, bounds.min_distance, bounds.max_distance)
}

fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}
