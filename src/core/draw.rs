use glam::{Mat4, Vec3};

/// Drawing primitives consumed by the demo each frame.
///
/// Positions are in world space and mapped through `transform` (normally the
/// camera's full view). Widths and diameters are in pixels; colors are RGB in
/// [0, 1].
pub trait DrawTarget {
    /// Filled quadrilateral with corners in winding order
    fn quad(&mut self, corners: [Vec3; 4], transform: &Mat4, color: [f32; 3]);

    /// Filled disk centered on a world point
    fn disk(&mut self, center: Vec3, diameter: f32, transform: &Mat4, color: [f32; 3]);

    /// Solid line
    fn line(&mut self, from: Vec3, to: Vec3, width: f32, transform: &Mat4, color: [f32; 3]);

    /// Dashed line
    fn dashed_line(&mut self, from: Vec3, to: Vec3, width: f32, transform: &Mat4, color: [f32; 3]);
}
