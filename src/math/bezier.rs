use glam::{Mat4, Vec3, Vec4};

/// Number of line segments used when drawing the curve
pub const CURVE_SEGMENTS: usize = 100;

/// Cubic Bézier basis in matrix form.
///
/// Multiplying by the power basis `(t³, t², t, 1)` yields the four Bernstein
/// weights `((1-t)³, 3t(1-t)², 3t²(1-t), t³)`. The matrix is symmetric, so
/// row and column order agree.
pub const BLENDING: Mat4 = Mat4::from_cols_array_2d(&[
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
]);

/// Line segment between two world positions
pub type Segment = (Vec3, Vec3);

/// Cubic Bézier curve over exactly four control points P0..P3
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve {
    points: [Vec3; 4],
}

impl BezierCurve {
    pub const fn new(points: [Vec3; 4]) -> Self {
        Self { points }
    }

    /// Blending weights for parameter `t`
    pub fn weights(t: f32) -> Vec4 {
        BLENDING * Vec4::new(t * t * t, t * t, t, 1.0)
    }

    /// Position on the curve at `t`.
    ///
    /// Values outside [0, 1] extrapolate the polynomial.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.points;
        let geometry = Mat4::from_cols(p0.extend(0.0), p1.extend(0.0), p2.extend(0.0), p3.extend(0.0));
        (geometry * Self::weights(t)).truncate()
    }

    /// Approximate the curve with `segments` straight pieces
    pub fn tessellate_curve(&self, segments: usize) -> Vec<Segment> {
        let step = |i: usize| i as f32 / segments as f32;
        (0..segments)
            .map(|i| (self.evaluate(step(i)), self.evaluate(step(i + 1))))
            .collect()
    }

    /// Edges P0-P1, P1-P2, P2-P3 in order
    pub fn control_polygon_edges(&self) -> [Segment; 3] {
        let p = &self.points;
        [(p[0], p[1]), (p[1], p[2]), (p[2], p[3])]
    }

    /// Overwrite one control point. Panics if `index >= 4`.
    pub fn set_control_point(&mut self, index: usize, position: Vec3) {
        self.points[index] = position;
    }

    pub fn control_point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    pub fn control_points(&self) -> &[Vec3; 4] {
        &self.points
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::new([
            Vec3::new(0.1, 0.1, 0.0),
            Vec3::new(0.25, 0.7, 0.0),
            Vec3::new(0.75, 0.7, 0.0),
            Vec3::new(0.9, 0.1, 0.0),
        ])
    }
}
