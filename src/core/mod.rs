pub mod animation;
pub mod camera;
pub mod canvas;
pub mod controller;
pub mod draw;
pub mod gpu_context;
pub mod input_adapter;
pub mod interaction;
pub mod surface_renderer;
pub mod viewport;

pub use animation::{oscillate, Oscillator, DEFAULT_DURATION};
pub use camera::CameraController;
pub use canvas::{Canvas, DrawOp, DASH_GAP, DASH_LENGTH};
pub use controller::{Button, PointerEvent};
pub use draw::DrawTarget;
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use interaction::{Interaction, Mover, PickState, HIT_RADIUS};
pub use surface_renderer::SurfaceRenderer;
pub use viewport::Viewport;
