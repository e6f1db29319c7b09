// This demo shows how to drive the scaler with SDL2 directly.

use dpiscaler::platform::sdl2_density_source;
use dpiscaler::CanvasScale;
use dpiscaler::Scaler;
use dpiscaler::ScalerBuilder;
use dpiscaler::Sdl2Window;
use dpiscaler::Window;
use dpiscaler::sdl2;
use sdl2::event::Event;
use sdl2::event::WindowEvent;
use sdl2::keyboard::Keycode;

fn main() {
    // Setup logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // Setup SDL
    let sdl_context = sdl2::init().expect("Failed to initialize sdl2");
    let video_subsystem = sdl_context
        .video()
        .expect("Failed to create sdl video subsystem");

    let window = video_subsystem
        .window("dpiscaler", 900, 600)
        .position_centered()
        .allow_highdpi()
        .resizable()
        .build()
        .expect("Failed to create window");
    log::info!("window created");

    // The UI is authored at 900x600, and assets at 1x
    let scaler: Result<Scaler<_, CanvasScale>, _> = ScalerBuilder::new()
        .reference_resolution(900.0, 600.0)
        .build(sdl2_density_source());

    // Check if the config was rejected
    let mut scaler = match scaler {
        Ok(scaler) => scaler,
        Err(e) => {
            println!("Error during scaler construction: {}", e);
            return;
        }
    };

    scaler.activate(
        CanvasScale::default(),
        &Sdl2Window::new(&window).screen_state(),
    );
    log::info!("{}", scaler.diagnostic());

    let mut event_pump = sdl_context
        .event_pump()
        .expect("Could not create sdl event pump");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    scaler.tick(&Sdl2Window::new(&window).screen_state());
                    log::info!("{}", scaler.diagnostic());
                }
                _ => {}
            }
        }

        // A real app would tick once per frame and draw with the canvas scale here
        scaler.tick(&Sdl2Window::new(&window).screen_state());
        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    if let Some(canvas) = scaler.deactivate() {
        log::info!("scaler released, canvas reset to {:?}", canvas);
    }
}
