use glam::{Vec2, Vec3};

/// Viewport - pixel dimensions of the drawable area
///
/// Screen coordinates follow the window convention: origin at the top-left
/// corner, y growing downwards, measured in physical pixels. Normalized device
/// coordinates have y up and span [-1, 1] on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create new viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, 1.0 for a degenerate viewport
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// NDC position to screen pixel, depth passed through as z
    pub fn ndc_to_screen(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
            ndc.z,
        )
    }

    /// Screen pixel plus depth back to NDC
    pub fn screen_to_ndc(&self, screen: Vec2, depth: f32) -> Vec3 {
        Vec3::new(
            screen.x / self.width as f32 * 2.0 - 1.0,
            1.0 - screen.y / self.height as f32 * 2.0,
            depth,
        )
    }
}
