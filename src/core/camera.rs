use glam::{Mat4, Vec2, Vec3};

use super::viewport::Viewport;

/// Camera abstraction used by picking, dragging and drawing
pub trait CameraController {
    /// World to eye transform
    fn view_matrix(&self) -> Mat4;

    /// Eye to clip transform
    fn projection_matrix(&self) -> Mat4;

    /// Current drawable area
    fn viewport(&self) -> Viewport;

    /// Begin an orbit (or pan when `shift`) gesture at screen position
    fn down(&mut self, x: f32, y: f32, shift: bool);

    /// Continue the active gesture
    fn drag(&mut self, x: f32, y: f32);

    /// End the active gesture
    fn up(&mut self);

    /// Zoom (or change field of view when `shift`)
    fn wheel(&mut self, spin: f32, shift: bool);

    /// Track new window dimensions
    fn resize(&mut self, width: u32, height: u32);

    /// Combined world to clip transform
    fn full_view(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World position to screen pixel; z carries NDC depth
    fn project(&self, world: Vec3) -> Vec3 {
        let ndc = self.full_view().project_point3(world);
        self.viewport().ndc_to_screen(ndc)
    }

    /// Like `project`, but `None` for points behind the eye
    fn project_visible(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.full_view() * world.extend(1.0);
        (clip.w > 0.0).then(|| self.viewport().ndc_to_screen(clip.truncate() / clip.w))
    }

    /// Screen pixel at NDC `depth` back to world space
    fn unproject(&self, screen: Vec2, depth: f32) -> Vec3 {
        let ndc = self.viewport().screen_to_ndc(screen, depth);
        self.full_view().inverse().project_point3(ndc)
    }

    /// Viewing direction in world space
    fn forward(&self) -> Vec3 {
        self.view_matrix()
            .inverse()
            .transform_vector3(Vec3::NEG_Z)
            .normalize()
    }
}
