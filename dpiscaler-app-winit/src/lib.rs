//! Runs a winit event loop and keeps a scaler in sync with the window.
//!
//! Implement `AppHandler` and launch with `AppBuilder::run`. The handler gets the current canvas
//! scale every frame.

#[macro_use]
extern crate log;

mod app;
pub use app::App;
pub use app::AppHandler;
pub use app::AppBuilder;
pub use app::AppError;
pub use app::AppUpdateArgs;
pub use app::AppDensitySource;
pub use app::simulated_density_for_key;

mod app_control;
pub use app_control::AppControl;

mod util;
pub use util::PeriodicEvent;

pub use dpiscaler_core;
pub use dpiscaler_winit::winit;
