use std::sync::Arc;

use bezier_demo::cli::Cli;
use bezier_demo::core::{CameraController, Canvas, DrawOp, Oscillator, WinitController};
use bezier_demo::frame::{FpsCounter, FrameIterator};
use bezier_demo::window::Window;
use bezier_demo::{BezierCurve, BezierDemo, OrbitCamera};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 255];

// === Application ===

struct App {
    cli: Cli,
    window: Option<Window>,
    camera: OrbitCamera,
    canvas: Canvas,
    demo: BezierDemo,
    input: WinitController,
    frames: FrameIterator,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli) -> Self {
        let demo = BezierDemo::new(BezierCurve::default(), Oscillator::new(cli.duration));
        Self {
            camera: OrbitCamera::new(cli.width, cli.height),
            canvas: Canvas::new(cli.width, cli.height),
            window: None,
            demo,
            input: WinitController::new(),
            frames: FrameIterator::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            cli,
        }
    }

    /// Keep camera, canvas and surface at the same physical size
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(window) = &mut self.window {
            window.resize(width, height);
        }
        self.camera.resize(width, height);
        self.canvas.resize(width, height);
    }

    fn redraw(&mut self) {
        let Some(frame) = self.frames.next() else {
            return;
        };
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        self.canvas.push(DrawOp::Clear(CLEAR_COLOR));
        self.demo.draw(&self.camera, frame.time, &mut self.canvas);
        self.canvas.flush();

        if let Some(window) = &mut self.window {
            if let Err(e) = window.draw(&self.canvas) {
                log::error!("Render error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WinitWindow::default_attributes()
            .with_title(self.cli.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height));

        let inner = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let window = match Window::new(inner) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = window.dimensions();
        self.window = Some(window);
        self.resize(width, height);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(pointer) = self.input.process_event(&event) {
            self.demo.handle(pointer, &mut self.camera);
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Bézier curve - drag control points, drag elsewhere to orbit (shift pans), wheel zooms, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
