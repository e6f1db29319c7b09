use super::compute_scale;
use super::AppliedState;
use super::ConfigError;
use super::DensityReading;
use super::DensitySource;
use super::ScaleOutput;
use super::ScaleTarget;
use super::ScalingConfig;
use super::ScreenState;
use super::StateApplier;

/// A builder to create the scaler. Validates the config, since the scaler itself never does.
#[derive(Default)]
pub struct ScalerBuilder {
    config: ScalingConfig,
}

impl ScalerBuilder {
    /// Construct the scaler builder with default options
    pub fn new() -> Self {
        ScalerBuilder {
            config: Default::default(),
        }
    }

    /// Replace the whole config at once
    pub fn config(
        mut self,
        config: ScalingConfig,
    ) -> Self {
        self.config = config;
        self
    }

    /// The resolution the UI was authored against
    pub fn reference_resolution(
        mut self,
        width: f32,
        height: f32,
    ) -> Self {
        self.config = self.config.reference_resolution(width, height);
        self
    }

    pub fn reference_pixels_per_unit(
        mut self,
        reference_pixels_per_unit: f32,
    ) -> Self {
        self.config = self
            .config
            .reference_pixels_per_unit(reference_pixels_per_unit);
        self
    }

    pub fn design_scale_factor(
        mut self,
        design_scale_factor: f32,
    ) -> Self {
        self.config = self.config.design_scale_factor(design_scale_factor);
        self
    }

    /// Builds the scaler. It starts inactive, call `activate` to attach it to a target.
    pub fn build<S: DensitySource, T: ScaleTarget>(
        self,
        density_source: S,
    ) -> Result<Scaler<S, T>, ConfigError> {
        self.config.validate()?;
        Ok(Scaler::new(self.config, density_source))
    }
}

/// Computes a scale factor for a target canvas and keeps it up to date.
///
/// The host drives it: `activate` when the canvas comes into existence, `tick` once per frame or
/// whenever the window is resized, and `deactivate` when the canvas goes away. Inactive is the
/// initial state and the only other state is active, holding the target.
pub struct Scaler<S, T> {
    config: ScalingConfig,
    density_source: S,
    applier: StateApplier,
    target: Option<T>,
    last_reading: DensityReading,
    last_output: Option<ScaleOutput>,
}

impl<S: DensitySource, T: ScaleTarget> Scaler<S, T> {
    /// Create an inactive scaler. The config is used as-is, prefer `ScalerBuilder` to have it
    /// validated.
    pub fn new(
        config: ScalingConfig,
        density_source: S,
    ) -> Self {
        Scaler {
            config,
            density_source,
            applier: StateApplier::new(),
            target: None,
            last_reading: DensityReading::fallback(),
            last_output: None,
        }
    }

    pub fn config(&self) -> &ScalingConfig {
        &self.config
    }

    /// Takes effect on the next `tick`
    pub fn set_config(
        &mut self,
        config: ScalingConfig,
    ) {
        self.config = config;
    }

    pub fn density_source(&self) -> &S {
        &self.density_source
    }

    pub fn density_source_mut(&mut self) -> &mut S {
        &mut self.density_source
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn applied_state(&self) -> &AppliedState {
        self.applier.applied()
    }

    /// The density used by the most recent evaluation
    pub fn last_reading(&self) -> &DensityReading {
        &self.last_reading
    }

    /// The output of the most recent evaluation, if there has been one since activation
    pub fn last_output(&self) -> Option<ScaleOutput> {
        self.last_output
    }

    /// Human readable summary of the current state, for debug displays
    pub fn diagnostic(&self) -> String {
        match self.last_output {
            Some(output) if self.is_active() => format!(
                "scale {} (ppu {}), density {}",
                output.scale_factor, output.reference_pixels_per_unit, self.last_reading
            ),
            _ => "inactive".to_string(),
        }
    }

    /// Attach to a target and evaluate immediately. If already active, the previous target is
    /// reset and dropped first.
    ///
    /// Panics if the target is in a display mode that doesn't support scaling. That's a setup
    /// mistake in the host, not something that can happen at runtime.
    pub fn activate(
        &mut self,
        target: T,
        screen: &ScreenState,
    ) {
        assert!(
            target.supports_scaling(),
            "Scaler can only be attached to a target that supports scaling"
        );

        if self.deactivate().is_some() {
            debug!("Scaler was already active, previous target was reset");
        }

        info!(
            "Scaler activated, reference resolution {}x{}",
            self.config.reference_resolution.width, self.config.reference_resolution.height
        );
        self.target = Some(target);
        self.handle(screen);
    }

    /// Re-evaluate and write any changed values to the target. Returns the computed output, or None
    /// if nothing was evaluated (inactive, or the target isn't a root canvas).
    pub fn tick(
        &mut self,
        screen: &ScreenState,
    ) -> Option<ScaleOutput> {
        self.handle(screen)
    }

    /// Reset the target to the defaults and release it
    pub fn deactivate(&mut self) -> Option<T> {
        let mut target = self.target.take()?;
        self.applier.reset(&mut target);
        self.last_output = None;
        info!("Scaler deactivated");
        Some(target)
    }

    fn handle(
        &mut self,
        screen: &ScreenState,
    ) -> Option<ScaleOutput> {
        let target = match self.target.as_mut() {
            Some(target) if target.is_root() => target,
            _ => return None,
        };

        let reading = self.density_source.resolve(screen);
        let output = compute_scale(screen, &self.config, &reading);
        self.applier.apply(
            target,
            output.scale_factor,
            output.reference_pixels_per_unit,
        );

        self.last_reading = reading;
        self.last_output = Some(output);
        Some(output)
    }
}
