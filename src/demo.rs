use glam::Vec3;

use crate::core::{CameraController, DrawTarget, Interaction, Oscillator, PickState, PointerEvent};
use crate::math::{BezierCurve, CURVE_SEGMENTS, GREEN, RED, WHITE};

/// Curve and control polygon line width, in pixels
pub const LINE_WIDTH: f32 = 3.0;
pub const CONTROL_POINT_DIAMETER: f32 = 15.0;
pub const MARKER_DIAMETER: f32 = 10.0;

/// Backdrop square behind the curve
const BACKDROP: [Vec3; 4] = [
    Vec3::new(2.0, 2.0, 0.0),
    Vec3::new(-2.0, 2.0, 0.0),
    Vec3::new(-2.0, -2.0, 0.0),
    Vec3::new(2.0, -2.0, 0.0),
];

/// Curve, gesture state and animation for one window
#[derive(Debug, Clone, Default)]
pub struct BezierDemo {
    curve: BezierCurve,
    interaction: Interaction,
    animation: Oscillator,
}

impl BezierDemo {
    pub fn new(curve: BezierCurve, animation: Oscillator) -> Self {
        Self {
            curve,
            interaction: Interaction::new(),
            animation,
        }
    }

    pub fn curve(&self) -> &BezierCurve {
        &self.curve
    }

    pub fn pick_state(&self) -> PickState {
        self.interaction.state()
    }

    /// Apply one pointer event to the curve or camera
    pub fn handle<C: CameraController>(&mut self, event: PointerEvent, camera: &mut C) {
        self.interaction.handle(event, &mut self.curve, camera);
    }

    /// Where the animated marker sits at `elapsed` seconds
    pub fn marker(&self, elapsed: f32) -> Vec3 {
        self.curve.evaluate(self.animation.parameter(elapsed))
    }

    /// Emit one frame of draw calls
    pub fn draw<C: CameraController, D: DrawTarget>(&self, camera: &C, elapsed: f32, target: &mut D) {
        let view = camera.full_view();

        target.quad(BACKDROP, &view, WHITE);

        for (from, to) in self.curve.tessellate_curve(CURVE_SEGMENTS) {
            target.line(from, to, LINE_WIDTH, &view, RED);
        }

        for (from, to) in self.curve.control_polygon_edges() {
            target.dashed_line(from, to, LINE_WIDTH, &view, GREEN);
        }
        for &point in self.curve.control_points() {
            target.disk(point, CONTROL_POINT_DIAMETER, &view, GREEN);
        }

        target.disk(self.marker(elapsed), MARKER_DIAMETER, &view, RED);
    }
}
