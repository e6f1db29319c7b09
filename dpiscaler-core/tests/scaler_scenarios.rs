use dpiscaler_core::*;

const EPSILON: f32 = 0.001;

fn approx_eq(
    a: f32,
    b: f32,
) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn retina_phone_fits_reference() {
    let cache = DensityCache::new();
    let mut scaler: Scaler<_, CanvasScale> = ScalerBuilder::new()
        .reference_resolution(375.0, 667.0)
        .build(MobileDensitySource::with_cache(&cache))
        .unwrap();

    // 480 dpi is 3x on mobile
    scaler.activate(CanvasScale::default(), &ScreenState::new(750.0, 1334.0, 480.0));
    assert_eq!(scaler.last_reading().factor(), 3.0);
    assert!(approx_eq(scaler.target().unwrap().scale_factor, 2.0));
}

#[test]
fn small_screen_shrinks_below_one() {
    let mut scaler: Scaler<_, CanvasScale> = ScalerBuilder::new()
        .reference_resolution(375.0, 667.0)
        .build(SystemDpiDensitySource::new())
        .unwrap();

    scaler.activate(CanvasScale::default(), &ScreenState::new(320.0, 480.0, 96.0));
    let output = scaler.last_output().unwrap();
    assert!(approx_eq(output.scale_factor, 0.719));
}

#[test]
fn focus_loss_keeps_last_good_density() {
    let cache = DensityCache::new();
    let mut scaler: Scaler<_, CanvasScale> = ScalerBuilder::new()
        .reference_resolution(400.0, 300.0)
        .build(BackingScaleDensitySource::with_cache(&cache))
        .unwrap();

    scaler.activate(CanvasScale::default(), &ScreenState::new(2000.0, 1500.0, 2.0));
    assert_eq!(scaler.target().unwrap().scale_factor, 2.0);

    let output = scaler.tick(&ScreenState::new(2000.0, 1500.0, 0.0)).unwrap();
    assert_eq!(output.scale_factor, 2.0);
    assert_eq!(scaler.last_reading().source(), ReadingSource::CachedLastGood);
}

#[test]
fn non_positive_density_is_one() {
    let mut scaler: Scaler<_, CanvasScale> = ScalerBuilder::new()
        .reference_resolution(400.0, 300.0)
        .build(SystemDpiDensitySource::new())
        .unwrap();

    for dpi in &[0.0, -120.0] {
        scaler.activate(CanvasScale::default(), &ScreenState::new(4000.0, 3000.0, *dpi));
        assert_eq!(scaler.last_reading().factor(), 1.0);
        assert_eq!(scaler.target().unwrap().scale_factor, 1.0);
    }
}

#[test]
fn simulated_device_drives_scale() {
    let settings = SimulationSettings::new(SimulatedDensity::One).guess_from_screen_size(true);
    let mut scaler: Scaler<_, CanvasScale> = ScalerBuilder::new()
        .reference_resolution(375.0, 812.0)
        .build(SimulatedDensitySource::new(settings))
        .unwrap();

    scaler.activate(CanvasScale::default(), &ScreenState::new(1125.0, 2436.0, 0.0));
    assert_eq!(scaler.last_reading().device_label(), Some("iPhone X/XS/11 Pro"));
    assert!(approx_eq(scaler.target().unwrap().scale_factor, 3.0));
    assert_eq!(
        scaler.density_source().last_device_label(),
        Some("iPhone X/XS/11 Pro")
    );

    // Operator turns guessing off and picks 2x from the menu
    {
        let settings = scaler.density_source_mut().settings_mut();
        settings.guess_from_screen_size = false;
        settings.selected_density = SimulatedDensity::Two;
    }
    let output = scaler.tick(&ScreenState::new(1125.0, 2436.0, 0.0)).unwrap();
    assert_eq!(output.scale_factor, 2.0);
    assert_eq!(scaler.last_reading().source(), ReadingSource::EditorSimulated);
}

#[test]
fn deactivate_always_restores_defaults() {
    let mut scaler: Scaler<_, CanvasScale> = ScalerBuilder::new()
        .reference_resolution(375.0, 667.0)
        .reference_pixels_per_unit(16.0)
        .build(SystemDpiDensitySource::new())
        .unwrap();

    scaler.activate(CanvasScale::default(), &ScreenState::new(100.0, 100.0, 96.0));
    let canvas = scaler.deactivate().unwrap();
    assert_eq!(canvas, CanvasScale {
        scale_factor: 1.0,
        reference_pixels_per_unit: 100.0
    });
}

#[test]
fn boxed_sources_can_be_swapped_per_platform() {
    let sources: Vec<Box<dyn DensitySource>> = vec![
        Box::new(SystemDpiDensitySource::new()),
        Box::new(SimulatedDensitySource::new(SimulationSettings::new(
            SimulatedDensity::Two,
        ))),
    ];

    for source in sources {
        let mut scaler: Scaler<_, CanvasScale> = ScalerBuilder::new()
            .reference_resolution(100.0, 100.0)
            .build(source)
            .unwrap();
        scaler.activate(CanvasScale::default(), &ScreenState::new(1000.0, 1000.0, 192.0));
        assert_eq!(scaler.target().unwrap().scale_factor, 2.0);
    }
}
