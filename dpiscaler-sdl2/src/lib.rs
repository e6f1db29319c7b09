//! Feeds an sdl2 window to the scaler.
//!
//! SDL doesn't settle on one notion of density, so the density source is chosen per target OS:
//! - Windows: the display DPI, with 96 as 100%
//! - Android/iOS: the display's physical DPI, with 160 as 1x
//! - everything else: the ratio of drawable size to window size, i.e. the backing scale

#[macro_use]
extern crate log;

pub use sdl2;

use dpiscaler_core::ScreenSize;
use dpiscaler_core::Window;

#[cfg(target_os = "windows")]
pub type DefaultDensitySource = dpiscaler_core::SystemDpiDensitySource;
#[cfg(any(target_os = "android", target_os = "ios"))]
pub type DefaultDensitySource = dpiscaler_core::MobileDensitySource<'static>;
#[cfg(not(any(target_os = "windows", target_os = "android", target_os = "ios")))]
pub type DefaultDensitySource = dpiscaler_core::BackingScaleDensitySource<'static>;

/// The density source matching what `Sdl2Window::raw_density` reports on this target
pub fn default_density_source() -> DefaultDensitySource {
    DefaultDensitySource::new()
}

pub struct Sdl2Window<'a> {
    window: &'a sdl2::video::Window,
}

impl<'a> Sdl2Window<'a> {
    pub fn new(window: &'a sdl2::video::Window) -> Self {
        Sdl2Window { window }
    }

    #[cfg(any(target_os = "windows", target_os = "android", target_os = "ios"))]
    fn query_display_dpi(&self) -> Option<f32> {
        let display_index = self
            .window
            .display_index()
            .map_err(|e| debug!("Could not get display index: {}", e))
            .ok()?;
        let system = self.window.subsystem();
        let (_, dpi, _) = system
            .display_dpi(display_index)
            .map_err(|e| debug!("Could not get display dpi: {}", e))
            .ok()?;
        Some(dpi)
    }
}

impl<'a> Window for Sdl2Window<'a> {
    fn screen_size(&self) -> ScreenSize {
        self.window.drawable_size().into()
    }

    #[cfg(any(target_os = "windows", target_os = "android", target_os = "ios"))]
    fn raw_density(&self) -> Option<f32> {
        self.query_display_dpi()
    }

    #[cfg(not(any(target_os = "windows", target_os = "android", target_os = "ios")))]
    fn raw_density(&self) -> Option<f32> {
        let drawable_size = self.window.drawable_size();
        let window_size = self.window.size();
        if window_size.0 == 0 {
            debug!("Window has no width, backing scale unavailable");
            return None;
        }

        Some(drawable_size.0 as f32 / window_size.0 as f32)
    }
}
