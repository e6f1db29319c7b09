//! Density acquisition. Each platform family gets its own `DensitySource` implementation; the
//! windowing adapter crates pick one at build time.

use std::sync::Mutex;
use std::sync::MutexGuard;

use super::ScreenState;

/// Physical density that mobile operating systems treat as 1x
pub const MOBILE_BASELINE_DPI: f32 = 160.0;

/// System DPI that desktop operating systems treat as 100%
pub const DESKTOP_BASELINE_DPI: f32 = 96.0;

/// Factor used whenever no usable reading exists
pub const FALLBACK_DENSITY_FACTOR: f32 = 1.0;

/// Where a density factor came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadingSource {
    /// The platform answered with a usable value just now
    RealPlatformQuery,
    /// The platform answered with nothing usable, a previously seen value was reused
    CachedLastGood,
    /// No hardware query was made, the value was chosen by an operator or guessed
    EditorSimulated,
    /// Nothing usable was available
    Fallback,
}

/// A density factor ready to be fed to the scale calculator. The factor is never below 1.0.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityReading {
    factor: f32,
    source: ReadingSource,
    device_label: Option<String>,
}

impl DensityReading {
    /// Creates a reading, raising the factor to 1.0 if it is lower. Density never scales content
    /// below the design baseline.
    pub fn new(
        factor: f32,
        source: ReadingSource,
    ) -> Self {
        DensityReading {
            factor: factor.max(FALLBACK_DENSITY_FACTOR),
            source,
            device_label: None,
        }
    }

    pub fn fallback() -> Self {
        DensityReading::new(FALLBACK_DENSITY_FACTOR, ReadingSource::Fallback)
    }

    /// Attach a human readable device name. Only used for diagnostics.
    pub fn with_device_label<T: Into<String>>(
        mut self,
        device_label: T,
    ) -> Self {
        self.device_label = Some(device_label.into());
        self
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn source(&self) -> ReadingSource {
        self.source
    }

    pub fn device_label(&self) -> Option<&str> {
        self.device_label.as_deref()
    }
}

impl Default for DensityReading {
    fn default() -> Self {
        DensityReading::fallback()
    }
}

impl core::fmt::Display for DensityReading {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        write!(fmt, "{}x ({:?})", self.factor, self.source)?;
        if let Some(device_label) = &self.device_label {
            write!(fmt, " {}", device_label)?;
        }

        Ok(())
    }
}

/// Abstracts over how a platform reports pixel density.
///
/// `resolve` never fails. If the platform has nothing usable, implementations return
/// `DensityReading::fallback()` (or a cached value, if they keep one).
pub trait DensitySource {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading;
}

impl<S: DensitySource + ?Sized> DensitySource for Box<S> {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading {
        (**self).resolve(screen)
    }
}

impl<'a, S: DensitySource + ?Sized> DensitySource for &'a mut S {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading {
        (**self).resolve(screen)
    }
}

/// Holds the last density factor a platform reported that was usable.
///
/// Platform queries return 0 while an app is in the background. Reusing the last good value avoids
/// the UI snapping to 1x and back when focus changes.
pub struct DensityCache {
    last_good: Mutex<Option<f32>>,
}

lazy_static::lazy_static! {
    static ref GLOBAL_DENSITY_CACHE: DensityCache = DensityCache::new();
}

impl Default for DensityCache {
    fn default() -> Self {
        DensityCache::new()
    }
}

impl DensityCache {
    pub fn new() -> Self {
        DensityCache {
            last_good: Mutex::new(None),
        }
    }

    /// The process-wide cache. The platform value it mirrors is global, so scalers share it.
    pub fn global() -> &'static DensityCache {
        &GLOBAL_DENSITY_CACHE
    }

    pub fn last_good(&self) -> Option<f32> {
        *self.lock()
    }

    pub fn store(
        &self,
        factor: f32,
    ) {
        *self.lock() = Some(factor);
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// Records `factor` if it is usable and returns a reading for it. Otherwise returns the cached
    /// value, or the fallback if nothing was ever cached.
    pub fn resolve(
        &self,
        factor: Option<f32>,
    ) -> DensityReading {
        let mut last_good = self.lock();
        match factor {
            Some(factor) if factor > 0.0 => {
                *last_good = Some(factor);
                DensityReading::new(factor, ReadingSource::RealPlatformQuery)
            }
            _ => match *last_good {
                Some(cached) => {
                    debug!(
                        "Platform density unavailable ({:?}), reusing cached {}",
                        factor, cached
                    );
                    DensityReading::new(cached, ReadingSource::CachedLastGood)
                }
                None => {
                    debug!(
                        "Platform density unavailable ({:?}), nothing cached, using fallback",
                        factor
                    );
                    DensityReading::fallback()
                }
            },
        }
    }

    // The cache only ever holds a plain float, so a panic elsewhere can't leave it inconsistent
    fn lock(&self) -> MutexGuard<Option<f32>> {
        self.last_good
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Divides a raw DPI by a baseline. Returns None for readings that can't be used.
pub fn normalize_dpi(
    dpi: f32,
    baseline_dpi: f32,
) -> Option<f32> {
    if dpi > 0.0 && baseline_dpi > 0.0 {
        Some(dpi / baseline_dpi)
    } else {
        None
    }
}

/// Touch devices that report physical pixel density. `ScreenState::dpi` is the physical DPI, with
/// 160 treated as 1x.
pub struct MobileDensitySource<'a> {
    cache: &'a DensityCache,
    baseline_dpi: f32,
}

impl Default for MobileDensitySource<'static> {
    fn default() -> Self {
        MobileDensitySource::new()
    }
}

impl MobileDensitySource<'static> {
    pub fn new() -> Self {
        MobileDensitySource::with_cache(DensityCache::global())
    }
}

impl<'a> MobileDensitySource<'a> {
    pub fn with_cache(cache: &'a DensityCache) -> Self {
        MobileDensitySource {
            cache,
            baseline_dpi: MOBILE_BASELINE_DPI,
        }
    }

    /// Override the DPI that counts as 1x
    pub fn baseline_dpi(
        mut self,
        baseline_dpi: f32,
    ) -> Self {
        self.baseline_dpi = baseline_dpi;
        self
    }
}

impl<'a> DensitySource for MobileDensitySource<'a> {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading {
        self.cache
            .resolve(normalize_dpi(screen.dpi, self.baseline_dpi))
    }
}

/// Desktop windowing systems that expose a backing scale (1.0, 2.0, ...). `ScreenState::dpi` is
/// the backing scale itself.
pub struct BackingScaleDensitySource<'a> {
    cache: &'a DensityCache,
}

impl Default for BackingScaleDensitySource<'static> {
    fn default() -> Self {
        BackingScaleDensitySource::new()
    }
}

impl BackingScaleDensitySource<'static> {
    pub fn new() -> Self {
        BackingScaleDensitySource::with_cache(DensityCache::global())
    }
}

impl<'a> BackingScaleDensitySource<'a> {
    pub fn with_cache(cache: &'a DensityCache) -> Self {
        BackingScaleDensitySource { cache }
    }
}

impl<'a> DensitySource for BackingScaleDensitySource<'a> {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading {
        self.cache.resolve(Some(screen.dpi))
    }
}

/// Desktop operating systems that expose a system DPI, with 96 treated as 100%. No caching, the
/// value doesn't drop out while the app is in the background.
pub struct SystemDpiDensitySource {
    baseline_dpi: f32,
}

impl Default for SystemDpiDensitySource {
    fn default() -> Self {
        SystemDpiDensitySource::new()
    }
}

impl SystemDpiDensitySource {
    pub fn new() -> Self {
        SystemDpiDensitySource {
            baseline_dpi: DESKTOP_BASELINE_DPI,
        }
    }

    /// Override the DPI that counts as 100%
    pub fn baseline_dpi(
        mut self,
        baseline_dpi: f32,
    ) -> Self {
        self.baseline_dpi = baseline_dpi;
        self
    }
}

impl DensitySource for SystemDpiDensitySource {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading {
        match normalize_dpi(screen.dpi, self.baseline_dpi) {
            Some(factor) => DensityReading::new(factor, ReadingSource::RealPlatformQuery),
            None => {
                debug!("System DPI {} unusable, using fallback", screen.dpi);
                DensityReading::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_with_dpi(dpi: f32) -> ScreenState {
        ScreenState::new(1280.0, 720.0, dpi)
    }

    #[test]
    fn test_reading_never_below_one() {
        let reading = DensityReading::new(0.75, ReadingSource::RealPlatformQuery);
        assert_eq!(reading.factor(), 1.0);
        assert_eq!(reading.source(), ReadingSource::RealPlatformQuery);

        let reading = DensityReading::new(f32::NAN, ReadingSource::RealPlatformQuery);
        assert_eq!(reading.factor(), 1.0);
    }

    #[test]
    fn test_reading_display() {
        let reading = DensityReading::new(2.0, ReadingSource::EditorSimulated)
            .with_device_label("iPhone 8");
        assert_eq!(reading.to_string(), "2x (EditorSimulated) iPhone 8");
        assert_eq!(DensityReading::fallback().to_string(), "1x (Fallback)");
    }

    #[test]
    fn test_system_dpi_normalizes_against_96() {
        let mut source = SystemDpiDensitySource::new();
        let reading = source.resolve(&screen_with_dpi(144.0));
        assert_eq!(reading.factor(), 1.5);
        assert_eq!(reading.source(), ReadingSource::RealPlatformQuery);
    }

    #[test]
    fn test_system_dpi_non_positive_falls_back() {
        let mut source = SystemDpiDensitySource::new();
        for dpi in &[0.0, -96.0, f32::NAN] {
            let reading = source.resolve(&screen_with_dpi(*dpi));
            assert_eq!(reading.factor(), 1.0);
            assert_eq!(reading.source(), ReadingSource::Fallback);
        }
    }

    #[test]
    fn test_mobile_normalizes_against_160() {
        let cache = DensityCache::new();
        let mut source = MobileDensitySource::with_cache(&cache);
        let reading = source.resolve(&screen_with_dpi(480.0));
        assert_eq!(reading.factor(), 3.0);
        assert_eq!(reading.source(), ReadingSource::RealPlatformQuery);
        assert_eq!(cache.last_good(), Some(3.0));
    }

    #[test]
    fn test_mobile_reuses_cache_on_transient_zero() {
        let cache = DensityCache::new();
        let mut source = MobileDensitySource::with_cache(&cache);
        source.resolve(&screen_with_dpi(320.0));

        let reading = source.resolve(&screen_with_dpi(0.0));
        assert_eq!(reading.factor(), 2.0);
        assert_eq!(reading.source(), ReadingSource::CachedLastGood);
    }

    #[test]
    fn test_backing_scale_reuses_cache_after_backgrounding() {
        let cache = DensityCache::new();
        let mut source = BackingScaleDensitySource::with_cache(&cache);

        let reading = source.resolve(&screen_with_dpi(2.0));
        assert_eq!(reading.factor(), 2.0);
        assert_eq!(reading.source(), ReadingSource::RealPlatformQuery);

        // App lost focus, the windowing API reports 0
        let reading = source.resolve(&screen_with_dpi(0.0));
        assert_eq!(reading.factor(), 2.0);
        assert_eq!(reading.source(), ReadingSource::CachedLastGood);
    }

    #[test]
    fn test_backing_scale_without_cache_falls_back() {
        let cache = DensityCache::new();
        let mut source = BackingScaleDensitySource::with_cache(&cache);
        let reading = source.resolve(&screen_with_dpi(-1.0));
        assert_eq!(reading, DensityReading::fallback());
        assert_eq!(cache.last_good(), None);
    }

    #[test]
    fn test_cache_shared_between_sources() {
        let cache = DensityCache::new();
        BackingScaleDensitySource::with_cache(&cache).resolve(&screen_with_dpi(1.5));

        let reading = BackingScaleDensitySource::with_cache(&cache).resolve(&screen_with_dpi(0.0));
        assert_eq!(reading.factor(), 1.5);

        cache.clear();
        let reading = BackingScaleDensitySource::with_cache(&cache).resolve(&screen_with_dpi(0.0));
        assert_eq!(reading.source(), ReadingSource::Fallback);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn DensitySource> = Box::new(SystemDpiDensitySource::new());
        assert_eq!(source.resolve(&screen_with_dpi(192.0)).factor(), 2.0);
    }
}
