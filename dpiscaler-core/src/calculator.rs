use super::DensityReading;
use super::ScalingConfig;
use super::ScreenState;

/// The two values pushed to a canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOutput {
    pub scale_factor: f32,
    pub reference_pixels_per_unit: f32,
}

impl ScaleOutput {
    pub fn new(
        scale_factor: f32,
        reference_pixels_per_unit: f32,
    ) -> Self {
        ScaleOutput {
            scale_factor,
            reference_pixels_per_unit,
        }
    }
}

/// Picks the largest scale at which the reference resolution still fits the screen, capped so that
/// density never enlarges content beyond what the design scale factor allows.
///
/// The config is not validated. A zero or negative reference dimension produces 0 or infinity, and
/// a zero screen dimension produces 0 (content disappears, which happens briefly during window
/// resizes on some hosts).
pub fn compute_scale(
    screen: &ScreenState,
    config: &ScalingConfig,
    density: &DensityReading,
) -> ScaleOutput {
    let horizontal_fit = screen.width / config.reference_resolution.width;
    let vertical_fit = screen.height / config.reference_resolution.height;
    let density_cap = density.factor() / config.design_scale_factor;

    ScaleOutput {
        scale_factor: horizontal_fit.min(vertical_fit).min(density_cap),
        reference_pixels_per_unit: config.reference_pixels_per_unit,
    }
}
