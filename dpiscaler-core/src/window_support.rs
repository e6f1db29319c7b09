//! The interface windowing adapters implement to feed the scaler

use super::ScreenSize;
use super::ScreenState;

pub trait Window {
    /// Size of the area the UI is laid out in
    fn screen_size(&self) -> ScreenSize;

    /// Density as the platform reports it, in the platform's own unit. None if the platform
    /// couldn't be queried.
    fn raw_density(&self) -> Option<f32>;

    /// Snapshot for a single evaluation. A failed density query is recorded as 0, which every
    /// `DensitySource` treats as unusable.
    fn screen_state(&self) -> ScreenState {
        ScreenState::from_size(self.screen_size(), self.raw_density().unwrap_or(0.0))
    }
}
