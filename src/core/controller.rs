use glam::Vec2;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MouseLeft,
    MouseRight,
    MouseMiddle,
    Shift,
}

/// Pointer input delivered by the host, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Vec2, button: Button, shift: bool },
    Move { position: Vec2 },
    Up { button: Button },
    Wheel { spin: f32, shift: bool },
}

impl PointerEvent {
    /// Primary button press at (x, y)
    pub fn press(x: f32, y: f32) -> Self {
        PointerEvent::Down {
            position: Vec2::new(x, y),
            button: Button::MouseLeft,
            shift: false,
        }
    }

    /// Pointer moved to (x, y)
    pub fn moved(x: f32, y: f32) -> Self {
        PointerEvent::Move { position: Vec2::new(x, y) }
    }

    /// Primary button release
    pub fn release() -> Self {
        PointerEvent::Up { button: Button::MouseLeft }
    }
}
