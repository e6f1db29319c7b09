//! Feeds a winit window to the scaler.
//!
//! winit already reduces every platform to a backing scale (DPI / 96 on Windows, the backing
//! scale factor on macOS, the Xft/wayland scale on Linux), so `BackingScaleDensitySource` is used
//! everywhere. Its cache covers the window reporting nothing useful while minimized.

#[cfg(feature = "winit-25")]
pub use winit_25 as winit;
// winit-26 is on by default, so an explicit winit-25 wins
#[cfg(all(feature = "winit-26", not(feature = "winit-25")))]
pub use winit_26 as winit;

use dpiscaler_core::BackingScaleDensitySource;
use dpiscaler_core::ScreenSize;
use dpiscaler_core::Window;

/// The density source matching what `WinitWindow::raw_density` reports
pub type DefaultDensitySource = BackingScaleDensitySource<'static>;

pub fn default_density_source() -> DefaultDensitySource {
    BackingScaleDensitySource::new()
}

#[derive(Clone)]
pub struct WinitWindow<'a> {
    window: &'a winit::window::Window,
}

impl<'a> WinitWindow<'a> {
    pub fn new(window: &'a winit::window::Window) -> Self {
        WinitWindow { window }
    }
}

impl<'a> Window for WinitWindow<'a> {
    fn screen_size(&self) -> ScreenSize {
        let physical_size: winit::dpi::PhysicalSize<u32> = self.window.inner_size();
        ScreenSize::new(physical_size.width as f32, physical_size.height as f32)
    }

    fn raw_density(&self) -> Option<f32> {
        Some(self.window.scale_factor() as f32)
    }
}
