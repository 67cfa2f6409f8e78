use glam::{Mat4, Vec2, Vec3, Vec4};

use super::draw::DrawTarget;
use super::viewport::Viewport;
use crate::math::to_rgba8;

/// Dash and gap lengths for dashed lines, in pixels
pub const DASH_LENGTH: f32 = 10.0;
pub const DASH_GAP: f32 = 6.0;

/// 2D drawing operations in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with RGBA color
    Clear([u8; 4]),

    /// Fill convex quadrilateral
    Quad { corners: [Vec2; 4], color: [u8; 4] },

    /// Fill disk
    Disk { center: Vec2, radius: f32, color: [u8; 4] },

    /// Thick line with round caps
    Line { from: Vec2, to: Vec2, width: f32, color: [u8; 4] },

    /// Thick line broken into `DASH_LENGTH` dashes separated by `DASH_GAP`
    DashedLine { from: Vec2, to: Vec2, width: f32, color: [u8; 4] },
}

/// Canvas state - RGBA pixel buffer with pending draw operations
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<[u8; 4]>,
    operations: Vec<DrawOp>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions, cleared to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![[0; 4]; (width * height) as usize],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Queue draw operation in place
    pub fn push(&mut self, op: DrawOp) {
        self.operations.push(op);
    }

    /// Execute all pending operations and return the canvas
    pub fn execute_ops(mut self) -> Self {
        self.flush();
        self
    }

    /// Execute all pending operations in submission order
    pub fn flush(&mut self) {
        let operations = std::mem::take(&mut self.operations);
        for op in &operations {
            self.execute_op(op);
        }
    }

    /// Reallocate for new dimensions, dropping contents and pending operations
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.pixels.fill(color),
            DrawOp::Quad { corners, color } => self.fill_quad(corners, color),
            DrawOp::Disk { center, radius, color } => self.fill_disk(center, radius, color),
            DrawOp::Line { from, to, width, color } => self.fill_line(from, to, width, color),
            DrawOp::DashedLine { from, to, width, color } => self.fill_dashed_line(from, to, width, color),
        }
    }

    /// Set every pixel whose center satisfies `inside` within the bounding box
    fn fill_where(&mut self, min: Vec2, max: Vec2, color: [u8; 4], inside: impl Fn(Vec2) -> bool) {
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                if inside(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.pixels[(y * self.width + x) as usize] = color;
                }
            }
        }
    }

    fn fill_disk(&mut self, center: Vec2, radius: f32, color: [u8; 4]) {
        let extent = Vec2::splat(radius);
        let r_sq = radius * radius;
        self.fill_where(center - extent, center + extent, color, |p| {
            p.distance_squared(center) <= r_sq
        });
    }

    fn fill_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [u8; 4]) {
        let half = (width * 0.5).max(0.5);
        let extent = Vec2::splat(half);
        let edge = to - from;
        let len_sq = edge.length_squared();

        self.fill_where(from.min(to) - extent, from.max(to) + extent, color, |p| {
            let s = if len_sq > 0.0 {
                ((p - from).dot(edge) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            p.distance(from + edge * s) <= half
        });
    }

    fn fill_dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [u8; 4]) {
        let length = from.distance(to);
        if length == 0.0 || !length.is_finite() {
            return;
        }
        let direction = (to - from) / length;
        let Some((enter, exit)) = self.visible_span(from, direction, length, width * 0.5 + 1.0) else {
            return;
        };

        // whole dash indices keep the pattern anchored at `from` and bound the loop
        let period = DASH_LENGTH + DASH_GAP;
        let first = (enter / period).floor() as u64;
        let last = (exit / period).ceil() as u64;
        for dash in first..last {
            let start = dash as f32 * period;
            if start >= length {
                break;
            }
            let end = (start + DASH_LENGTH).min(length);
            self.fill_line(from + direction * start, from + direction * end, width, color);
        }
    }

    /// Distances along a ray that lie within the canvas grown by `pad`
    fn visible_span(&self, origin: Vec2, direction: Vec2, length: f32, pad: f32) -> Option<(f32, f32)> {
        let min = Vec2::splat(-pad);
        let max = Vec2::new(self.width as f32 + pad, self.height as f32 + pad);
        let (mut enter, mut exit) = (0.0_f32, length);

        for axis in 0..2 {
            let (o, d) = (origin[axis], direction[axis]);
            if d.abs() < f32::EPSILON {
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let a = (min[axis] - o) / d;
            let b = (max[axis] - o) / d;
            enter = enter.max(a.min(b));
            exit = exit.min(a.max(b));
        }

        (enter < exit).then_some((enter, exit))
    }

    /// Convex quad fill; accepts either winding
    fn fill_quad(&mut self, corners: [Vec2; 4], color: [u8; 4]) {
        let min = corners.iter().fold(Vec2::splat(f32::MAX), |acc, c| acc.min(*c));
        let max = corners.iter().fold(Vec2::splat(f32::MIN), |acc, c| acc.max(*c));

        self.fill_where(min, max, color, |p| {
            let sides = (0..4).map(|i| {
                let a = corners[i];
                let b = corners[(i + 1) % 4];
                (b - a).perp_dot(p - a)
            });
            let (mut positive, mut negative) = (false, false);
            for side in sides {
                positive |= side > 0.0;
                negative |= side < 0.0;
            }
            !(positive && negative)
        });
    }

    /// Clip-space position to screen pixel
    fn to_screen(&self, clip: Vec4) -> Vec2 {
        self.viewport().ndc_to_screen(clip.truncate() / clip.w).truncate()
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixel buffer as tightly packed RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Color at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Operations queued since the last flush
    pub fn pending(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// A clip-space point lies in front of the near plane (NDC depth 0)
fn in_front(clip: Vec4) -> bool {
    clip.z >= 0.0 && clip.w > 0.0
}

/// Where the segment a-b crosses the near plane
fn near_crossing(a: Vec4, b: Vec4) -> Vec4 {
    a.lerp(b, a.z / (a.z - b.z))
}

/// Cut a clip-space segment at the near plane
fn clip_segment(a: Vec4, b: Vec4) -> Option<(Vec4, Vec4)> {
    let (a, b) = match (a.z >= 0.0, b.z >= 0.0) {
        (true, true) => (a, b),
        (true, false) => (a, near_crossing(a, b)),
        (false, true) => (near_crossing(a, b), b),
        (false, false) => return None,
    };
    (a.w > 0.0 && b.w > 0.0).then_some((a, b))
}

/// Sutherland-Hodgman against the near plane; a quad yields 0 or 3..=5 vertices
fn clip_polygon(polygon: &[Vec4]) -> Vec<Vec4> {
    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        if current.z >= 0.0 {
            clipped.push(current);
        }
        if (current.z >= 0.0) != (next.z >= 0.0) {
            clipped.push(near_crossing(current, next));
        }
    }
    clipped
}

impl DrawTarget for Canvas {
    fn quad(&mut self, corners: [Vec3; 4], transform: &Mat4, color: [f32; 3]) {
        let clip = corners.map(|c| *transform * c.extend(1.0));
        let polygon = clip_polygon(&clip);
        if polygon.len() < 3 || polygon.iter().any(|p| p.w <= 0.0) {
            return;
        }

        let color = to_rgba8(color);
        let screen: Vec<Vec2> = polygon.iter().map(|&p| self.to_screen(p)).collect();
        if let [a, b, c, d] = screen[..] {
            self.push(DrawOp::Quad { corners: [a, b, c, d], color });
            return;
        }
        // triangle fan, each triangle as a quad with a repeated corner
        for i in 1..screen.len() - 1 {
            let (a, b, c) = (screen[0], screen[i], screen[i + 1]);
            self.push(DrawOp::Quad { corners: [a, b, c, c], color });
        }
    }

    fn disk(&mut self, center: Vec3, diameter: f32, transform: &Mat4, color: [f32; 3]) {
        let clip = *transform * center.extend(1.0);
        if in_front(clip) {
            let center = self.to_screen(clip);
            self.push(DrawOp::Disk { center, radius: diameter * 0.5, color: to_rgba8(color) });
        }
    }

    fn line(&mut self, from: Vec3, to: Vec3, width: f32, transform: &Mat4, color: [f32; 3]) {
        if let Some((a, b)) = clip_segment(*transform * from.extend(1.0), *transform * to.extend(1.0)) {
            let (from, to) = (self.to_screen(a), self.to_screen(b));
            self.push(DrawOp::Line { from, to, width, color: to_rgba8(color) });
        }
    }

    fn dashed_line(&mut self, from: Vec3, to: Vec3, width: f32, transform: &Mat4, color: [f32; 3]) {
        if let Some((a, b)) = clip_segment(*transform * from.extend(1.0), *transform * to.extend(1.0)) {
            let (from, to) = (self.to_screen(a), self.to_screen(b));
            self.push(DrawOp::DashedLine { from, to, width, color: to_rgba8(color) });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn canvas_creation() {
        let canvas = Canvas::new(100, 50);
        assert_eq!(canvas.dimensions(), (100, 50));
        assert_eq!(canvas.pixels().len(), 100 * 50);
        assert_eq!(canvas.as_bytes().len(), 100 * 50 * 4);
    }

    #[test]
    fn canvas_clear() {
        let canvas = Canvas::new(10, 10).draw(DrawOp::Clear(RED)).execute_ops();
        assert!(canvas.pixels().iter().all(|p| *p == RED));
        assert!(canvas.pending().is_empty());
    }

    #[test]
    fn canvas_disk() {
        let canvas = Canvas::new(50, 50)
            .draw(DrawOp::Disk { center: Vec2::new(25.0, 25.0), radius: 5.0, color: WHITE })
            .execute_ops();

        assert_eq!(canvas.pixel(25, 25), Some(WHITE));
        assert_eq!(canvas.pixel(25, 22), Some(WHITE));
        assert_eq!(canvas.pixel(25, 15), Some([0; 4]));
    }

    #[test]
    fn canvas_line_covers_endpoints() {
        let canvas = Canvas::new(50, 50)
            .draw(DrawOp::Line { from: Vec2::new(10.5, 10.5), to: Vec2::new(40.5, 10.5), width: 3.0, color: RED })
            .execute_ops();

        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(40, 10), Some(RED));
        assert_eq!(canvas.pixel(25, 11), Some(RED));
        assert_eq!(canvas.pixel(25, 14), Some([0; 4]));
    }

    #[test]
    fn canvas_dashed_line_leaves_gaps() {
        let canvas = Canvas::new(50, 10)
            .draw(DrawOp::DashedLine { from: Vec2::new(0.0, 5.0), to: Vec2::new(50.0, 5.0), width: 2.0, color: RED })
            .execute_ops();

        // first dash covers [0, 10], gap covers (10, 16)
        assert_eq!(canvas.pixel(5, 5), Some(RED));
        assert_eq!(canvas.pixel(13, 5), Some([0; 4]));
        assert_eq!(canvas.pixel(20, 5), Some(RED));
    }

    #[test]
    fn canvas_quad_either_winding() {
        let square = [
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(10.0, 20.0),
        ];
        let mut reversed = square;
        reversed.reverse();

        for corners in [square, reversed] {
            let canvas = Canvas::new(30, 30).draw(DrawOp::Quad { corners, color: WHITE }).execute_ops();
            assert_eq!(canvas.pixel(15, 15), Some(WHITE));
            assert_eq!(canvas.pixel(5, 5), Some([0; 4]));
        }
    }

    #[test]
    fn canvas_bounds_clipping() {
        let canvas = Canvas::new(10, 10)
            .draw(DrawOp::Disk { center: Vec2::new(-50.0, 200.0), radius: 8.0, color: RED })
            .draw(DrawOp::Disk { center: Vec2::new(0.0, 0.0), radius: 3.0, color: RED })
            .execute_ops();

        assert_eq!(canvas.pixels().len(), 100);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(10, 0), None);
    }

    #[test]
    fn draw_target_projects_through_transform() {
        // identity transform: NDC (0, 0) is the canvas center
        let mut canvas = Canvas::new(20, 20);
        canvas.disk(Vec3::ZERO, 4.0, &Mat4::IDENTITY, [1.0, 0.0, 0.0]);
        assert_eq!(
            canvas.pending(),
            &[DrawOp::Disk { center: Vec2::new(10.0, 10.0), radius: 2.0, color: RED }]
        );
    }

    #[test]
    fn draw_target_skips_points_behind_eye() {
        let mut canvas = Canvas::new(20, 20);
        let perspective = Mat4::perspective_rh(1.0, 1.0, 0.1, 10.0);
        canvas.disk(Vec3::new(0.0, 0.0, 5.0), 4.0, &perspective, [1.0, 0.0, 0.0]);
        assert!(canvas.pending().is_empty());
    }

    #[test]
    fn near_clip_of_one_corner_fans_into_triangles() {
        let perspective = Mat4::perspective_rh(1.0, 1.0, 0.1, 10.0);
        let corners = [
            Vec3::new(-1.0, -1.0, -3.0),
            Vec3::new(1.0, -1.0, -3.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, -3.0),
        ];
        let clip = corners.map(|c| perspective * c.extend(1.0));
        assert_eq!(clip_polygon(&clip).len(), 5);

        let mut canvas = Canvas::new(20, 20);
        canvas.quad(corners, &perspective, [1.0, 1.0, 1.0]);
        assert_eq!(canvas.pending().len(), 3);
        assert!(canvas.pending().iter().all(|op| matches!(op, DrawOp::Quad { .. })));
    }

    #[test]
    fn clip_segment_keeps_front_part() {
        let a = Vec4::new(0.0, 0.0, 1.0, 1.0);
        let b = Vec4::new(2.0, 0.0, -1.0, 1.0);
        let (from, to) = clip_segment(a, b).unwrap();
        assert_eq!(from, a);
        assert_eq!(to, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(clip_segment(b, b).is_none());
    }

    #[test]
    fn resize_reallocates() {
        let mut canvas = Canvas::new(4, 4).draw(DrawOp::Clear(RED));
        canvas.resize(8, 2);
        assert_eq!(canvas.dimensions(), (8, 2));
        assert_eq!(canvas.pixels().len(), 16);
        assert!(canvas.pending().is_empty());
    }
}
