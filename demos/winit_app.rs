// This demo shows the app layer. Run with --simulate to ignore the platform density, then press
// 1-5 to pick a density from the menu.

use dpiscaler::app::AppBuilder;
use dpiscaler::app::AppError;
use dpiscaler::app::AppHandler;
use dpiscaler::app::AppUpdateArgs;
use dpiscaler::CanvasScale;
use dpiscaler::ScalingConfig;
use dpiscaler::SimulatedDensity;
use dpiscaler::SimulationSettings;

fn main() {
    // Setup logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let simulate = std::env::args().any(|arg| arg == "--simulate");

    // UI authored for an iPhone 8 sized screen, with assets drawn at 1x
    let scaling_config = ScalingConfig::new()
        .reference_resolution(375.0, 667.0)
        .reference_pixels_per_unit(100.0)
        .design_scale_factor(1.0);

    let mut builder = AppBuilder::new()
        .window_title("dpiscaler")
        .inner_size(dpiscaler::winit::dpi::LogicalSize::new(375.0, 667.0))
        .scaling_config(scaling_config);

    if simulate {
        builder = builder.simulate(
            SimulationSettings::new(SimulatedDensity::Two).guess_from_screen_size(true),
        );
    }

    builder.run(ExampleApp::default());
}

#[derive(Default)]
struct ExampleApp {
    previous_canvas: Option<CanvasScale>,
}

impl AppHandler for ExampleApp {
    fn update(
        &mut self,
        update_args: AppUpdateArgs,
    ) {
        // A real app would hand the canvas scale to its UI layer here
        if self.previous_canvas != Some(update_args.canvas) {
            log::info!(
                "{}x{} -> scale {} (ppu {}), density {}",
                update_args.screen.width,
                update_args.screen.height,
                update_args.canvas.scale_factor,
                update_args.canvas.reference_pixels_per_unit,
                update_args.density
            );
            self.previous_canvas = Some(update_args.canvas);
        }
    }

    fn fatal_error(
        &mut self,
        error: &AppError,
    ) {
        println!("{}", error);
    }
}
