/// Size of the drawable area of a window, in whatever units the platform hands out for layout
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(
        width: f32,
        height: f32,
    ) -> Self {
        ScreenSize { width, height }
    }
}

impl From<(u32, u32)> for ScreenSize {
    fn from(size: (u32, u32)) -> Self {
        ScreenSize::new(size.0 as f32, size.1 as f32)
    }
}

/// The viewport size the UI is authored against
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceResolution {
    pub width: f32,
    pub height: f32,
}

impl ReferenceResolution {
    pub fn new(
        width: f32,
        height: f32,
    ) -> Self {
        ReferenceResolution { width, height }
    }

    /// True if both components can be divided by without producing 0 or infinity
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl Default for ReferenceResolution {
    fn default() -> Self {
        ReferenceResolution::new(800.0, 600.0)
    }
}

/// Snapshot of the screen taken at the start of an evaluation. Never stored between evaluations.
///
/// `dpi` is the raw density the platform reports. Its unit depends on the platform: dots per inch
/// where the OS exposes DPI, the backing scale where the windowing layer exposes one, and `0.0`
/// when nothing is available. The `DensitySource` in use knows how to interpret it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenState {
    pub width: f32,
    pub height: f32,
    pub dpi: f32,
}

impl ScreenState {
    pub fn new(
        width: f32,
        height: f32,
        dpi: f32,
    ) -> Self {
        ScreenState { width, height, dpi }
    }

    pub fn from_size(
        size: ScreenSize,
        dpi: f32,
    ) -> Self {
        ScreenState::new(size.width, size.height, dpi)
    }

    pub fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }
}
