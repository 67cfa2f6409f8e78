mod bezier;
mod color;

pub use bezier::{BezierCurve, Segment, BLENDING, CURVE_SEGMENTS};
pub use color::{to_rgba8, GREEN, RED, WHITE};
