//! Density-aware UI scaling
//!
//! Given the resolution a UI was designed for, the live size of the window and the pixel density
//! the platform reports, this computes the single scale factor a canvas should apply to its whole
//! hierarchy (plus the reference pixels per unit, which passes straight through).
//!
//! The pieces:
//! - `DensitySource`: one implementation per platform family, plus a simulated one for editors
//! - `compute_scale`: the scaling decision itself
//! - `StateApplier`: writes to the canvas only when something changed
//! - `Scaler`: ties them together behind `activate` / `tick` / `deactivate`

#[macro_use]
extern crate log;

mod coordinates;
pub use coordinates::ScreenSize;
pub use coordinates::ScreenState;
pub use coordinates::ReferenceResolution;

mod config;
pub use config::ScalingConfig;
pub use config::ConfigError;
pub use config::DEFAULT_REFERENCE_PIXELS_PER_UNIT;
pub use config::DEFAULT_DESIGN_SCALE_FACTOR;

mod density;
pub use density::DensitySource;
pub use density::DensityReading;
pub use density::ReadingSource;
pub use density::DensityCache;
pub use density::MobileDensitySource;
pub use density::BackingScaleDensitySource;
pub use density::SystemDpiDensitySource;
pub use density::normalize_dpi;
pub use density::MOBILE_BASELINE_DPI;
pub use density::DESKTOP_BASELINE_DPI;
pub use density::FALLBACK_DENSITY_FACTOR;

mod simulation;
pub use simulation::SimulatedDensity;
pub use simulation::SimulatedDensitySource;
pub use simulation::SimulationSettings;
pub use simulation::DeviceProfile;
pub use simulation::KNOWN_DEVICES;
pub use simulation::guess_device;

mod calculator;
pub use calculator::compute_scale;
pub use calculator::ScaleOutput;

mod applier;
pub use applier::ScaleTarget;
pub use applier::CanvasScale;
pub use applier::AppliedState;
pub use applier::StateApplier;
pub use applier::DEFAULT_SCALE_FACTOR;

mod scaler;
pub use scaler::Scaler;
pub use scaler::ScalerBuilder;

mod window_support;
pub use window_support::Window;
