//! Pushes computed values into the canvas being scaled, skipping writes that wouldn't change
//! anything

use super::DEFAULT_REFERENCE_PIXELS_PER_UNIT;

/// Scale factor a target is reset to when scaling stops
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

/// The canvas (or equivalent) owned by the host UI framework
pub trait ScaleTarget {
    fn set_scale_factor(
        &mut self,
        scale_factor: f32,
    );

    fn set_reference_pixels_per_unit(
        &mut self,
        reference_pixels_per_unit: f32,
    );

    /// Only root-level canvases are scaled. Nested canvases inherit their parent's scale.
    fn is_root(&self) -> bool {
        true
    }

    /// False if the target is in a display mode that ignores the scale factor
    fn supports_scaling(&self) -> bool {
        true
    }
}

impl<'a, T: ScaleTarget + ?Sized> ScaleTarget for &'a mut T {
    fn set_scale_factor(
        &mut self,
        scale_factor: f32,
    ) {
        (**self).set_scale_factor(scale_factor)
    }

    fn set_reference_pixels_per_unit(
        &mut self,
        reference_pixels_per_unit: f32,
    ) {
        (**self).set_reference_pixels_per_unit(reference_pixels_per_unit)
    }

    fn is_root(&self) -> bool {
        (**self).is_root()
    }

    fn supports_scaling(&self) -> bool {
        (**self).supports_scaling()
    }
}

/// A plain pair of values, for hosts that read the scale back rather than having it pushed into
/// their own canvas type
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasScale {
    pub scale_factor: f32,
    pub reference_pixels_per_unit: f32,
}

impl Default for CanvasScale {
    fn default() -> Self {
        CanvasScale {
            scale_factor: DEFAULT_SCALE_FACTOR,
            reference_pixels_per_unit: DEFAULT_REFERENCE_PIXELS_PER_UNIT,
        }
    }
}

impl ScaleTarget for CanvasScale {
    fn set_scale_factor(
        &mut self,
        scale_factor: f32,
    ) {
        self.scale_factor = scale_factor;
    }

    fn set_reference_pixels_per_unit(
        &mut self,
        reference_pixels_per_unit: f32,
    ) {
        self.reference_pixels_per_unit = reference_pixels_per_unit;
    }
}

/// The values most recently written to the target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedState {
    pub last_scale_factor: f32,
    pub last_reference_pixels_per_unit: f32,
}

impl Default for AppliedState {
    fn default() -> Self {
        AppliedState {
            last_scale_factor: DEFAULT_SCALE_FACTOR,
            last_reference_pixels_per_unit: DEFAULT_REFERENCE_PIXELS_PER_UNIT,
        }
    }
}

/// Owns the `AppliedState`. Nothing else mutates it.
#[derive(Default)]
pub struct StateApplier {
    applied: AppliedState,
}

impl StateApplier {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn applied(&self) -> &AppliedState {
        &self.applied
    }

    /// Writes each value that differs from what was last written
    #[allow(clippy::float_cmp)]
    pub fn apply<T: ScaleTarget + ?Sized>(
        &mut self,
        target: &mut T,
        scale_factor: f32,
        reference_pixels_per_unit: f32,
    ) {
        if scale_factor != self.applied.last_scale_factor {
            trace!(
                "scale factor {} -> {}",
                self.applied.last_scale_factor,
                scale_factor
            );
            target.set_scale_factor(scale_factor);
            self.applied.last_scale_factor = scale_factor;
        }

        if reference_pixels_per_unit != self.applied.last_reference_pixels_per_unit {
            trace!(
                "reference pixels per unit {} -> {}",
                self.applied.last_reference_pixels_per_unit,
                reference_pixels_per_unit
            );
            target.set_reference_pixels_per_unit(reference_pixels_per_unit);
            self.applied.last_reference_pixels_per_unit = reference_pixels_per_unit;
        }
    }

    /// Writes the defaults to the target regardless of what was last written
    pub fn reset<T: ScaleTarget + ?Sized>(
        &mut self,
        target: &mut T,
    ) {
        self.applied = AppliedState::default();
        target.set_scale_factor(self.applied.last_scale_factor);
        target.set_reference_pixels_per_unit(self.applied.last_reference_pixels_per_unit);
    }
}
