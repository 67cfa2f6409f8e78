use glam::{Mat4, Vec2, Vec3};

use crate::core::{CameraController, Viewport};

pub const CAMERA_ROTATION_SPEED: f32 = 0.01;
pub const CAMERA_PAN_SPEED: f32 = 0.005;
pub const CAMERA_ZOOM_SPEED: f32 = 0.25;
pub const MIN_FOV: f32 = 5.0;
pub const MAX_FOV: f32 = 120.0;

/// Camera state captured when a drag begins
#[derive(Debug, Clone, Copy)]
struct DragStart {
    mouse: Vec2,
    pan: bool,
    yaw: f32,
    pitch: f32,
    translation: Vec3,
}

/// Orbits the scene around the world origin.
///
/// The view is `translate(translation) * rot_x(pitch) * rot_y(yaw)`: the scene
/// spins in place and is then pushed in front of the eye.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub translation: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    viewport: Viewport,
    drag: Option<DragStart>,
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            translation: Vec3::new(0.0, 0.0, -4.5),
            fov: 30.0,
            near: 0.001,
            far: 500.0,
            viewport: Viewport::new(width, height),
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl CameraController for OrbitCamera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_y(self.yaw)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.viewport.aspect(), self.near, self.far)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn down(&mut self, x: f32, y: f32, shift: bool) {
        self.drag = Some(DragStart {
            mouse: Vec2::new(x, y),
            pan: shift,
            yaw: self.yaw,
            pitch: self.pitch,
            translation: self.translation,
        });
    }

    fn drag(&mut self, x: f32, y: f32) {
        let Some(start) = self.drag else {
            return;
        };
        let delta = Vec2::new(x, y) - start.mouse;

        if start.pan {
            let offset = Vec3::new(delta.x, -delta.y, 0.0) * CAMERA_PAN_SPEED;
            self.translation = start.translation + offset;
        } else {
            self.yaw = start.yaw + delta.x * CAMERA_ROTATION_SPEED;
            self.pitch = start.pitch + delta.y * CAMERA_ROTATION_SPEED;
        }
    }

    fn up(&mut self) {
        self.drag = None;
    }

    fn wheel(&mut self, spin: f32, shift: bool) {
        if shift {
            self.fov = (self.fov - spin).clamp(MIN_FOV, MAX_FOV);
        } else {
            self.translation.z += spin * CAMERA_ZOOM_SPEED;
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }
}
