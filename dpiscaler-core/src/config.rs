//! Configuration owned by the surface being scaled

use super::ReferenceResolution;

/// Default conversion between sprite pixels and layout units. Also the value a target is reset to
/// when scaling is deactivated.
pub const DEFAULT_REFERENCE_PIXELS_PER_UNIT: f32 = 100.0;

/// Default design scale factor, meaning "no additional density compensation"
pub const DEFAULT_DESIGN_SCALE_FACTOR: f32 = 1.0;

/// Represents a configuration that can't produce a meaningful scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveReferenceResolution(ReferenceResolution),
    NonPositiveReferencePixelsPerUnit(f32),
    NonPositiveDesignScaleFactor(f32),
}

impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        match *self {
            ConfigError::NonPositiveReferenceResolution(ref resolution) => write!(
                fmt,
                "reference resolution must be positive in both dimensions, got {}x{}",
                resolution.width, resolution.height
            ),
            ConfigError::NonPositiveReferencePixelsPerUnit(value) => write!(
                fmt,
                "reference pixels per unit must be positive, got {}",
                value
            ),
            ConfigError::NonPositiveDesignScaleFactor(value) => {
                write!(fmt, "design scale factor must be positive, got {}", value)
            }
        }
    }
}

/// Describes how a UI authored for a fixed resolution should be scaled onto the live screen.
///
/// The calculator reads this as-is on every evaluation and does not validate it. Call `validate`
/// (or build through `ScalerBuilder`, which does) before handing it to a scaler.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScalingConfig {
    pub reference_resolution: ReferenceResolution,
    pub reference_pixels_per_unit: f32,
    pub design_scale_factor: f32,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        ScalingConfig::new()
    }
}

impl ScalingConfig {
    /// Construct the config initialized with default options
    pub fn new() -> Self {
        ScalingConfig {
            reference_resolution: ReferenceResolution::default(),
            reference_pixels_per_unit: DEFAULT_REFERENCE_PIXELS_PER_UNIT,
            design_scale_factor: DEFAULT_DESIGN_SCALE_FACTOR,
        }
    }

    /// The resolution the UI was authored against
    pub fn reference_resolution(
        mut self,
        width: f32,
        height: f32,
    ) -> Self {
        self.reference_resolution = ReferenceResolution::new(width, height);
        self
    }

    /// Passed through to the target unchanged
    pub fn reference_pixels_per_unit(
        mut self,
        reference_pixels_per_unit: f32,
    ) -> Self {
        self.reference_pixels_per_unit = reference_pixels_per_unit;
        self
    }

    /// Set this when assets are already authored at a multiple of the baseline density. For
    /// example, assets drawn for a 2x screen should use 2.0.
    pub fn design_scale_factor(
        mut self,
        design_scale_factor: f32,
    ) -> Self {
        self.design_scale_factor = design_scale_factor;
        self
    }

    /// Returns an error if any value would make the scale factor degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference_resolution.is_positive() {
            return Err(ConfigError::NonPositiveReferenceResolution(
                self.reference_resolution,
            ));
        }

        if !(self.reference_pixels_per_unit > 0.0) {
            return Err(ConfigError::NonPositiveReferencePixelsPerUnit(
                self.reference_pixels_per_unit,
            ));
        }

        if !(self.design_scale_factor > 0.0) {
            return Err(ConfigError::NonPositiveDesignScaleFactor(
                self.design_scale_factor,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScalingConfig::default();
        assert_eq!(config.reference_resolution, ReferenceResolution::new(800.0, 600.0));
        assert_eq!(config.reference_pixels_per_unit, 100.0);
        assert_eq!(config.design_scale_factor, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ScalingConfig::new()
            .reference_resolution(375.0, 667.0)
            .reference_pixels_per_unit(32.0)
            .design_scale_factor(2.0);

        assert_eq!(config.reference_resolution.width, 375.0);
        assert_eq!(config.reference_resolution.height, 667.0);
        assert_eq!(config.reference_pixels_per_unit, 32.0);
        assert_eq!(config.design_scale_factor, 2.0);
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let config = ScalingConfig::new().reference_resolution(0.0, 667.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveReferenceResolution(
                ReferenceResolution::new(0.0, 667.0)
            ))
        );

        let config = ScalingConfig::new().reference_pixels_per_unit(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveReferencePixelsPerUnit(-1.0))
        );

        let config = ScalingConfig::new().design_scale_factor(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDesignScaleFactor(0.0))
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = ScalingConfig::new().design_scale_factor(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_display() {
        let error = ConfigError::NonPositiveDesignScaleFactor(0.0);
        assert_eq!(error.to_string(), "design scale factor must be positive, got 0");
    }
}
