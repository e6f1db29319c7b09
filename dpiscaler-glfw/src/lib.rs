pub use glfw;

use dpiscaler_core::BackingScaleDensitySource;
use dpiscaler_core::ScreenSize;
use dpiscaler_core::Window;

/// glfw reports a content scale, which is a backing scale
pub type DefaultDensitySource = BackingScaleDensitySource<'static>;

pub fn default_density_source() -> DefaultDensitySource {
    BackingScaleDensitySource::new()
}

pub struct GlfwWindow<'a> {
    window: &'a glfw::Window,
}

impl<'a> GlfwWindow<'a> {
    pub fn new(window: &'a glfw::Window) -> Self {
        GlfwWindow { window }
    }
}

impl<'a> Window for GlfwWindow<'a> {
    fn screen_size(&self) -> ScreenSize {
        let (x, y) = self.window.get_framebuffer_size();
        ScreenSize::new(x.max(0) as f32, y.max(0) as f32)
    }

    fn raw_density(&self) -> Option<f32> {
        Some(self.window.get_content_scale().0)
    }
}
