use std::sync::Arc;

use anyhow::Result;
use winit::window::Window as WinitWindow;

use crate::core::{Canvas, SurfaceRenderer};

/// Wrapper around winit Window with imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
    renderer: SurfaceRenderer,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Result<Self> {
        let renderer = SurfaceRenderer::new(window.clone())?;
        Ok(Self { inner: window, renderer })
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Present a rasterized canvas
    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        self.renderer.present(canvas)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    /// Surface size in physical pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.renderer.dimensions()
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
