use glam::{Vec2, Vec3};

use super::camera::CameraController;
use super::controller::{Button, PointerEvent};
use crate::math::BezierCurve;

/// Pick distance around a projected control point, in pixels
pub const HIT_RADIUS: f32 = 12.0;

/// Target of the current press-drag-release gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickState {
    #[default]
    None,
    ControlPoint(usize),
    Camera,
}

/// Drags a world point across the plane through it that faces the camera
#[derive(Debug, Clone, Copy)]
pub struct Mover {
    origin: Vec3,
    normal: Vec3,
    offset: Vec3,
}

impl Mover {
    /// Anchor on `point`, remembering where the pointer grabbed it
    pub fn down<C: CameraController>(point: Vec3, cursor: Vec2, camera: &C) -> Self {
        let mut mover = Self {
            origin: point,
            normal: camera.forward(),
            offset: Vec3::ZERO,
        };
        if let Some(hit) = mover.intersect(cursor, camera) {
            mover.offset = point - hit;
        }
        mover
    }

    /// New point position for the cursor, `None` when the view ray misses the plane
    pub fn drag<C: CameraController>(&self, cursor: Vec2, camera: &C) -> Option<Vec3> {
        self.intersect(cursor, camera).map(|hit| hit + self.offset)
    }

    fn intersect<C: CameraController>(&self, cursor: Vec2, camera: &C) -> Option<Vec3> {
        let near = camera.unproject(cursor, 0.0);
        let far = camera.unproject(cursor, 1.0);
        let direction = far - near;

        let denom = self.normal.dot(direction);
        if denom.abs() < f32::EPSILON {
            return None;
        }
        let t = self.normal.dot(self.origin - near) / denom;
        Some(near + direction * t)
    }
}

/// Routes pointer gestures to either a control point or the camera
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: PickState,
    mover: Option<Mover>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PickState {
        self.state
    }

    /// First visible control point, in index order, within `HIT_RADIUS` of `cursor`
    pub fn hit_test<C: CameraController>(curve: &BezierCurve, camera: &C, cursor: Vec2) -> Option<usize> {
        curve.control_points().iter().position(|&p| {
            camera
                .project_visible(p)
                .is_some_and(|screen| screen.truncate().distance(cursor) < HIT_RADIUS)
        })
    }

    /// Dispatch one host pointer event
    pub fn handle<C: CameraController>(&mut self, event: PointerEvent, curve: &mut BezierCurve, camera: &mut C) {
        match event {
            PointerEvent::Down { position, button: Button::MouseLeft, shift } => {
                self.pointer_down(curve, camera, position, shift);
            }
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => self.pointer_up(camera),
            PointerEvent::Move { position } => self.pointer_move(curve, camera, position),
            PointerEvent::Wheel { spin, shift } => camera.wheel(spin, shift),
        }
    }

    /// Pick a control point under the cursor, falling back to the camera
    pub fn pointer_down<C: CameraController>(
        &mut self,
        curve: &BezierCurve,
        camera: &mut C,
        cursor: Vec2,
        shift: bool,
    ) -> PickState {
        self.mover = None;
        self.state = match Self::hit_test(curve, &*camera, cursor) {
            Some(index) => {
                self.mover = Some(Mover::down(curve.control_point(index), cursor, &*camera));
                PickState::ControlPoint(index)
            }
            None => {
                camera.down(cursor.x, cursor.y, shift);
                PickState::Camera
            }
        };
        log::debug!("pointer down at {:?}: {:?}", cursor, self.state);
        self.state
    }

    /// Forward a drag to whichever target is picked
    pub fn pointer_move<C: CameraController>(&mut self, curve: &mut BezierCurve, camera: &mut C, cursor: Vec2) {
        match (self.state, self.mover) {
            (PickState::ControlPoint(index), Some(mover)) => {
                if let Some(position) = mover.drag(cursor, &*camera) {
                    curve.set_control_point(index, position);
                }
            }
            (PickState::Camera, _) => camera.drag(cursor.x, cursor.y),
            _ => {}
        }
    }

    /// End the gesture; always returns to `PickState::None`
    pub fn pointer_up<C: CameraController>(&mut self, camera: &mut C) {
        if self.state != PickState::None {
            log::debug!("released {:?}", self.state);
        }
        camera.up();
        self.state = PickState::None;
        self.mover = None;
    }
}
