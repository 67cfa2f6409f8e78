use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::controller::{Button, PointerEvent};

/// Pixels of trackpad scroll treated as one wheel notch
const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that bridges Winit events to `PointerEvent`s
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed: HashSet<Button>,
    /// Current cursor position (relative to window)
    cursor: Option<Vec2>,
}

impl WinitController {
    /// Create a new WinitController with no pressed buttons
    pub fn new() -> Self {
        Self::default()
    }

    /// Update internal state from a Winit event and translate pointer input
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.set_pressed(Button::Shift, modifiers.state().shift_key());
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::mouse_button_to_button(*button)?;
                self.set_pressed(button, state.is_pressed());
                match state {
                    ElementState::Pressed => Some(PointerEvent::Down {
                        position: self.cursor.unwrap_or(Vec2::ZERO),
                        button,
                        shift: self.is_down(Button::Shift),
                    }),
                    ElementState::Released => Some(PointerEvent::Up { button }),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                self.cursor = Some(position);
                Some(PointerEvent::Move { position })
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseWheel { delta, .. } => Some(PointerEvent::Wheel {
                spin: Self::scroll_to_spin(delta),
                shift: self.is_down(Button::Shift),
            }),
            _ => None,
        }
    }

    /// Check if button is currently down
    pub fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    /// Get current cursor position (if inside the window)
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor
    }

    fn set_pressed(&mut self, button: Button, down: bool) {
        if down {
            self.pressed.insert(button);
        } else {
            self.pressed.remove(&button);
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            MouseButton::Middle => Some(Button::MouseMiddle),
            _ => None,
        }
    }

    /// Wheel notches, positive when scrolling up
    fn scroll_to_spin(delta: &MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
        }
    }
}
