//! View session - the explicit owner of gesture and camera state
//!
//! Two cooperative producers feed this state on independent schedules:
//! the detection loop calls [`ViewState::on_predictions`] once per
//! completed hand detection, the render loop calls [`ViewState::tick`]
//! once per displayed frame. They communicate only through the published
//! [`CameraTarget`], which is replaced as a whole record. Teardown is an
//! explicit stop flag: once stopped, late-arriving callbacks are no-ops.

use crate::camera::{
    CameraAnimator, CameraState, CameraTarget, ControlBounds, OrbitControls, Viewport,
};
use crate::gesture::{CalibrationState, GestureInterpreter, HandObservation};

pub struct ViewState {
    interpreter: GestureInterpreter,
    animator: CameraAnimator,
    orbit: OrbitControls,
    camera: CameraState,
    bounds: ControlBounds,
    viewport: Viewport,
    /// Latest published gesture target, replaced wholesale.
    target: CameraTarget,
    stopped: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            interpreter: GestureInterpreter::new(),
            animator: CameraAnimator::new(),
            orbit: OrbitControls::new(),
            camera: CameraState::new(),
            bounds: ControlBounds::default(),
            viewport: Viewport::default(),
            target: CameraTarget::default(),
            stopped: false,
        }
    }

    /// Detection-loop entry: one interpretation cycle.
    pub fn on_predictions(&mut self, observations: &[HandObservation]) {
        if self.stopped {
            return;
        }
        self.target =
            self.interpreter
                .interpret(observations, &self.camera, self.viewport, &self.bounds);
    }

    /// Render-loop entry: animator tick plus the orbit-control update.
    /// Returns false when the view is stopped and nothing may render.
    pub fn tick(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.animator.tick(&mut self.camera, &self.target);
        self.orbit.update(&mut self.camera, &self.bounds);
        true
    }

    /// Teardown: no callback arriving after this mutates any state.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.stopped {
            return;
        }
        self.viewport = Viewport::new(width, height);
    }

    pub fn set_gesture_enabled(&mut self, enabled: bool) {
        self.interpreter.set_enabled(enabled);
        if !enabled {
            self.target = CameraTarget::default();
        }
    }

    pub fn set_inverse_rotation(&mut self, inverse: bool) {
        self.interpreter.set_inverse_rotation(inverse);
    }

    pub fn calibration_prompt(&self) -> Option<&'static str> {
        self.interpreter.prompt()
    }

    pub fn calibration_state(&self) -> &CalibrationState {
        self.interpreter.state()
    }

    pub fn orbit_drag(&mut self, dx: f32, dy: f32) {
        self.orbit.on_drag(dx, dy);
    }

    pub fn orbit_zoom(&mut self, delta: f32) {
        self.orbit.on_wheel(delta);
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{CalibrationStep, HandLandmark, INDEX_MCP, LANDMARK_COUNT, THUMB_CMC};

    fn closed_hand(tip: (f32, f32)) -> HandObservation {
        let mut landmarks = [HandLandmark::default(); LANDMARK_COUNT];
        for i in 0..4 {
            landmarks[THUMB_CMC + i] = HandLandmark {
                x: tip.0 - 30.0 + i as f32,
                y: tip.1 + 25.0,
                z: 0.0,
            };
            landmarks[INDEX_MCP + i] = HandLandmark {
                x: tip.0 - 10.0 + i as f32,
                y: tip.1 + 5.0,
                z: 0.0,
            };
        }
        landmarks[INDEX_MCP + 3] = HandLandmark {
            x: tip.0,
            y: tip.1,
            z: 0.0,
        };
        HandObservation { landmarks }
    }

    #[test]
    fn enabling_gestures_enters_calibration() {
        let mut view = ViewState::new();
        assert_eq!(*view.calibration_state(), CalibrationState::Idle);

        view.set_gesture_enabled(true);
        assert_eq!(
            *view.calibration_state(),
            CalibrationState::Calibrating(CalibrationStep::PromptCenterHand)
        );
    }

    #[test]
    fn gesture_drives_the_camera_through_the_whole_pipeline() {
        let mut view = ViewState::new();
        view.set_gesture_enabled(true);

        // Calibrate at the viewport center, then move the hand right.
        view.on_predictions(&[closed_hand((400.0, 300.0))]);
        view.on_predictions(&[closed_hand((600.0, 300.0))]);

        let z_before = view.camera().position.z;
        for _ in 0..50 {
            assert!(view.tick());
        }
        // Target zoom 86 pulls the camera out from z = 50, and the orbit
        // clamp keeps the whole position inside the control bounds.
        assert!(view.camera().position.z > z_before);
        assert!(view.camera().radius() <= ControlBounds::default().max_distance + 1e-3);
    }

    #[test]
    fn stopped_view_ignores_late_detection_callbacks() {
        let mut view = ViewState::new();
        view.set_gesture_enabled(true);
        view.on_predictions(&[closed_hand((400.0, 300.0))]);
        view.stop();

        let camera_before = *view.camera();
        let state_before = *view.calibration_state();

        // A detection callback landing after teardown.
        view.on_predictions(&[closed_hand((700.0, 100.0))]);
        view.resize(1920.0, 1080.0);
        assert!(!view.tick(), "a stopped view must not render");

        assert_eq!(*view.camera(), camera_before);
        assert_eq!(*view.calibration_state(), state_before);
        assert_eq!(view.viewport(), Viewport::default());
    }

    #[test]
    fn manual_orbit_works_without_gesture_control() {
        let mut view = ViewState::new();
        let angle_before = view.camera().position.x.atan2(view.camera().position.z);

        view.orbit_drag(60.0, 0.0);
        assert!(view.tick());

        let angle_after = view.camera().position.x.atan2(view.camera().position.z);
        assert!((angle_after - angle_before).abs() > 1e-4);
        assert_eq!(*view.calibration_state(), CalibrationState::Idle);
    }
}
