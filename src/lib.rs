//! Density-aware UI scaling
//!
//! Computes the scale factor a canvas should apply so that a UI authored for a fixed reference
//! resolution fits the live window, without density pushing it past what the design allows.
//!
//! Currently there are two ways to use this library.
//!
//! # dpiscaler::app
//!
//! Implement the AppHandler trait and launch the app. A winit window is created and the scaler is
//! kept up to date for you; the handler reads the current `CanvasScale` each frame.
//!
//! # dpiscaler::Scaler
//!
//! You manage the window and event loop yourself. Wrap the window in one of the adapters
//! (`WinitWindow`, `Sdl2Window`, `GlfwWindow`) and call `activate`/`tick`/`deactivate` on a
//! `Scaler` from your own lifecycle callbacks.

pub use dpiscaler_core::*;

#[cfg(feature = "dpiscaler_winit")]
pub use dpiscaler_app_winit as app;

#[cfg(feature = "dpiscaler_winit")]
pub use dpiscaler_winit::WinitWindow;
#[cfg(feature = "dpiscaler_sdl2")]
pub use dpiscaler_sdl2::Sdl2Window;
#[cfg(feature = "dpiscaler_glfw")]
pub use dpiscaler_glfw::GlfwWindow;

// Export these crates so that downstream crates can easily use the same version of them as we do
#[cfg(feature = "dpiscaler_winit")]
pub use dpiscaler_winit::winit;
#[cfg(feature = "dpiscaler_sdl2")]
pub use dpiscaler_sdl2::sdl2;
#[cfg(feature = "dpiscaler_glfw")]
pub use dpiscaler_glfw::glfw;

/// Platform density sources matching each adapter's `Window::raw_density`
pub mod platform {
    #[cfg(feature = "dpiscaler_winit")]
    pub use dpiscaler_winit::default_density_source as winit_density_source;
    #[cfg(feature = "dpiscaler_sdl2")]
    pub use dpiscaler_sdl2::default_density_source as sdl2_density_source;
    #[cfg(feature = "dpiscaler_glfw")]
    pub use dpiscaler_glfw::default_density_source as glfw_density_source;
}
