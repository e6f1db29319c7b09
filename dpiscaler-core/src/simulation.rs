//! Density for environments with no real hardware to ask, such as an editor or a desktop-hosted
//! device simulator.
//!
//! A simulator reports the raw pixel size of the device it's emulating but not the density the
//! manufacturer ships. When guessing is enabled, the screen size is looked up in a table of known
//! devices to fill in that gap.

use super::DensityReading;
use super::DensitySource;
use super::ReadingSource;
use super::ScreenState;

/// The density factors an operator can pick from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimulatedDensity {
    One,
    OneAndHalf,
    Two,
    TwoAndHalf,
    Three,
}

impl SimulatedDensity {
    /// Every option, in menu order
    pub const ALL: [SimulatedDensity; 5] = [
        SimulatedDensity::One,
        SimulatedDensity::OneAndHalf,
        SimulatedDensity::Two,
        SimulatedDensity::TwoAndHalf,
        SimulatedDensity::Three,
    ];

    pub fn factor(self) -> f32 {
        match self {
            SimulatedDensity::One => 1.0,
            SimulatedDensity::OneAndHalf => 1.5,
            SimulatedDensity::Two => 2.0,
            SimulatedDensity::TwoAndHalf => 2.5,
            SimulatedDensity::Three => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SimulatedDensity::One => "1x",
            SimulatedDensity::OneAndHalf => "1.5x",
            SimulatedDensity::Two => "2x",
            SimulatedDensity::TwoAndHalf => "2.5x",
            SimulatedDensity::Three => "3x",
        }
    }

    /// Position in the menu, starting at 0
    pub fn from_menu_index(index: usize) -> Option<SimulatedDensity> {
        Self::ALL.get(index).copied()
    }
}

impl Default for SimulatedDensity {
    fn default() -> Self {
        SimulatedDensity::One
    }
}

impl core::fmt::Display for SimulatedDensity {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        fmt.write_str(self.label())
    }
}

/// A device whose screen has `dimension` pixels along one of its axes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    pub dimension: u32,
    pub factor: f32,
    pub name: &'static str,
}

impl DeviceProfile {
    pub const fn new(
        dimension: u32,
        factor: f32,
        name: &'static str,
    ) -> Self {
        DeviceProfile {
            dimension,
            factor,
            name,
        }
    }

    /// True if either side of the screen is exactly this device's dimension
    pub fn matches(
        &self,
        screen: &ScreenState,
    ) -> bool {
        let dimension = self.dimension as f32;
        screen.width == dimension || screen.height == dimension
    }
}

/// Known devices in priority order. Earlier entries win when a screen matches several, so a
/// dimension shared between devices (e.g. 2048 is the short side of the 12.9" iPad Pro and the long
/// side of the Retina iPad) must list the more specific device first.
pub const KNOWN_DEVICES: &[DeviceProfile] = &[
    // iPhone, longest side
    DeviceProfile::new(2796, 3.0, "iPhone 14 Pro Max"),
    DeviceProfile::new(2778, 3.0, "iPhone 12/13 Pro Max"),
    DeviceProfile::new(2688, 3.0, "iPhone XS Max/11 Pro Max"),
    DeviceProfile::new(2556, 3.0, "iPhone 14 Pro"),
    DeviceProfile::new(2532, 3.0, "iPhone 12/13/14"),
    DeviceProfile::new(2436, 3.0, "iPhone X/XS/11 Pro"),
    DeviceProfile::new(2340, 3.0, "iPhone 12/13 mini"),
    DeviceProfile::new(2208, 3.0, "iPhone 6/7/8 Plus"),
    DeviceProfile::new(1792, 2.0, "iPhone XR/11"),
    DeviceProfile::new(1334, 2.0, "iPhone 6/7/8/SE"),
    DeviceProfile::new(1136, 2.0, "iPhone 5/5s/SE"),
    DeviceProfile::new(960, 2.0, "iPhone 4/4s"),
    // iPad
    DeviceProfile::new(2732, 2.0, "iPad Pro 12.9\""),
    DeviceProfile::new(2388, 2.0, "iPad Pro 11\""),
    DeviceProfile::new(2360, 2.0, "iPad Air (4th gen)"),
    DeviceProfile::new(2266, 2.0, "iPad mini (6th gen)"),
    DeviceProfile::new(2224, 2.0, "iPad Pro 10.5\""),
    DeviceProfile::new(2160, 2.0, "iPad (7th gen)"),
    DeviceProfile::new(2048, 2.0, "iPad Retina"),
    DeviceProfile::new(1024, 1.0, "iPad/iPad mini"),
    // Android, by density bucket
    DeviceProfile::new(2960, 4.0, "Galaxy S8/S9"),
    DeviceProfile::new(2560, 4.0, "Galaxy S6/S7"),
    DeviceProfile::new(1920, 3.0, "Android xxhdpi phone"),
    DeviceProfile::new(1280, 2.0, "Android xhdpi phone"),
    DeviceProfile::new(800, 1.5, "Android hdpi phone"),
    // Last since 480 also shows up as the short side of hdpi phones
    DeviceProfile::new(480, 1.0, "iPhone 3GS"),
];

/// Returns the first device in `table` with a side matching the screen
pub fn guess_device<'a>(
    table: &'a [DeviceProfile],
    screen: &ScreenState,
) -> Option<&'a DeviceProfile> {
    table.iter().find(|device| device.matches(screen))
}

/// Simulation options owned by whatever tooling the operator interacts with
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SimulationSettings {
    /// Used verbatim unless a device is guessed
    pub selected_density: SimulatedDensity,

    /// If true, try to identify the device from the screen size before using `selected_density`
    pub guess_from_screen_size: bool,
}

impl SimulationSettings {
    pub fn new(selected_density: SimulatedDensity) -> Self {
        SimulationSettings {
            selected_density,
            guess_from_screen_size: false,
        }
    }

    pub fn guess_from_screen_size(
        mut self,
        guess_from_screen_size: bool,
    ) -> Self {
        self.guess_from_screen_size = guess_from_screen_size;
        self
    }
}

/// Density source used when no hardware query is possible
pub struct SimulatedDensitySource {
    settings: SimulationSettings,
    devices: &'static [DeviceProfile],
    last_device_label: Option<String>,
}

impl SimulatedDensitySource {
    pub fn new(settings: SimulationSettings) -> Self {
        SimulatedDensitySource {
            settings,
            devices: KNOWN_DEVICES,
            last_device_label: None,
        }
    }

    /// Replace the table consulted when guessing. Entries are checked in order.
    pub fn with_devices(
        mut self,
        devices: &'static [DeviceProfile],
    ) -> Self {
        self.devices = devices;
        self
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SimulationSettings {
        &mut self.settings
    }

    /// Name of the device guessed during the most recent `resolve`, for display only
    pub fn last_device_label(&self) -> Option<&str> {
        self.last_device_label.as_deref()
    }
}

impl DensitySource for SimulatedDensitySource {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading {
        let selected = self.settings.selected_density;
        if self.settings.guess_from_screen_size {
            if let Some(device) = guess_device(self.devices, screen) {
                if self.last_device_label.as_deref() != Some(device.name) {
                    debug!(
                        "Screen {}x{} looks like {} ({}x)",
                        screen.width, screen.height, device.name, device.factor
                    );
                    self.last_device_label = Some(device.name.to_string());
                }

                return DensityReading::new(device.factor, ReadingSource::EditorSimulated)
                    .with_device_label(device.name);
            }

            if self.last_device_label.is_some() {
                debug!(
                    "Screen {}x{} matches no known device, using {}",
                    screen.width, screen.height, selected
                );
            }
        }

        self.last_device_label = None;
        DensityReading::new(selected.factor(), ReadingSource::EditorSimulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let factors: Vec<f32> = SimulatedDensity::ALL.iter().map(|x| x.factor()).collect();
        assert_eq!(factors, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(SimulatedDensity::from_menu_index(3), Some(SimulatedDensity::TwoAndHalf));
        assert_eq!(SimulatedDensity::from_menu_index(5), None);
        assert_eq!(SimulatedDensity::OneAndHalf.to_string(), "1.5x");
    }

    #[test]
    fn test_selected_factor_used_verbatim() {
        let mut source =
            SimulatedDensitySource::new(SimulationSettings::new(SimulatedDensity::TwoAndHalf));
        let reading = source.resolve(&ScreenState::new(1334.0, 750.0, 0.0));
        assert_eq!(reading.factor(), 2.5);
        assert_eq!(reading.source(), ReadingSource::EditorSimulated);
        assert_eq!(reading.device_label(), None);
    }

    #[test]
    fn test_guess_matches_either_dimension() {
        let portrait = ScreenState::new(750.0, 1334.0, 0.0);
        let landscape = ScreenState::new(1334.0, 750.0, 0.0);
        assert_eq!(guess_device(KNOWN_DEVICES, &portrait).unwrap().name, "iPhone 6/7/8/SE");
        assert_eq!(guess_device(KNOWN_DEVICES, &landscape).unwrap().name, "iPhone 6/7/8/SE");
    }

    #[test]
    fn test_guess_first_listed_wins() {
        // 2048 matches "iPad Retina", 2732 matches "iPad Pro 12.9", which is listed first
        let screen = ScreenState::new(2048.0, 2732.0, 0.0);
        assert_eq!(guess_device(KNOWN_DEVICES, &screen).unwrap().name, "iPad Pro 12.9\"");

        const TABLE: &[DeviceProfile] = &[
            DeviceProfile::new(1080, 3.0, "first"),
            DeviceProfile::new(1920, 2.0, "second"),
        ];
        let screen = ScreenState::new(1080.0, 1920.0, 0.0);
        let device = guess_device(TABLE, &screen).unwrap();
        assert_eq!(device.name, "first");
        assert_eq!(device.factor, 3.0);
    }

    #[test]
    fn test_guess_requires_exact_match() {
        let screen = ScreenState::new(751.0, 1333.0, 0.0);
        assert_eq!(guess_device(KNOWN_DEVICES, &screen), None);
    }

    #[test]
    fn test_guessing_source_labels_device() {
        let settings =
            SimulationSettings::new(SimulatedDensity::One).guess_from_screen_size(true);
        let mut source = SimulatedDensitySource::new(settings);

        let reading = source.resolve(&ScreenState::new(1125.0, 2436.0, 0.0));
        assert_eq!(reading.factor(), 3.0);
        assert_eq!(reading.device_label(), Some("iPhone X/XS/11 Pro"));
        assert_eq!(source.last_device_label(), Some("iPhone X/XS/11 Pro"));
    }

    #[test]
    fn test_guessing_source_falls_back_to_selected() {
        let settings =
            SimulationSettings::new(SimulatedDensity::OneAndHalf).guess_from_screen_size(true);
        let mut source = SimulatedDensitySource::new(settings);

        source.resolve(&ScreenState::new(1125.0, 2436.0, 0.0));
        let reading = source.resolve(&ScreenState::new(1000.0, 700.0, 0.0));
        assert_eq!(reading.factor(), 1.5);
        assert_eq!(reading.device_label(), None);
        assert_eq!(source.last_device_label(), None);
    }

    #[test]
    fn test_settings_can_change_between_evaluations() {
        let mut source = SimulatedDensitySource::new(SimulationSettings::default());
        let screen = ScreenState::new(640.0, 480.0, 0.0);
        assert_eq!(source.resolve(&screen).factor(), 1.0);

        source.settings_mut().selected_density = SimulatedDensity::Three;
        assert_eq!(source.resolve(&screen).factor(), 3.0);
    }
}
