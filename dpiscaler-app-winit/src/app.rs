//! Contains the main types a user needs to interact with to configure and run a scaled app

use crate::winit;

use super::app_control::AppControl;
use super::util::PeriodicEvent;

use dpiscaler_core::CanvasScale;
use dpiscaler_core::ConfigError;
use dpiscaler_core::DensityReading;
use dpiscaler_core::DensitySource;
use dpiscaler_core::ScalerBuilder;
use dpiscaler_core::ScalingConfig;
use dpiscaler_core::ScreenState;
use dpiscaler_core::SimulatedDensity;
use dpiscaler_core::SimulatedDensitySource;
use dpiscaler_core::SimulationSettings;
use dpiscaler_core::Window;
use dpiscaler_winit::WinitWindow;

use winit::event::ElementState;
use winit::event::Event;
use winit::event::KeyboardInput;
use winit::event::VirtualKeyCode;
use winit::event::WindowEvent;

/// Represents an error from starting the app
#[derive(Debug)]
pub enum AppError {
    ConfigError(ConfigError),
    WinitError(winit::error::OsError),
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            AppError::ConfigError(ref e) => Some(e),
            AppError::WinitError(ref e) => Some(e),
        }
    }
}

impl core::fmt::Display for AppError {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        match *self {
            AppError::ConfigError(ref e) => e.fmt(fmt),
            AppError::WinitError(ref e) => e.fmt(fmt),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(result: ConfigError) -> Self {
        AppError::ConfigError(result)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(result: winit::error::OsError) -> Self {
        AppError::WinitError(result)
    }
}

/// Density source used by the app, either the real platform or the operator-driven simulation
pub enum AppDensitySource {
    Platform(dpiscaler_winit::DefaultDensitySource),
    Simulated(SimulatedDensitySource),
}

impl DensitySource for AppDensitySource {
    fn resolve(
        &mut self,
        screen: &ScreenState,
    ) -> DensityReading {
        match self {
            AppDensitySource::Platform(source) => source.resolve(screen),
            AppDensitySource::Simulated(source) => source.resolve(screen),
        }
    }
}

impl AppDensitySource {
    /// Changes the simulated density. Returns false if the platform is being queried instead.
    pub fn select_simulated_density(
        &mut self,
        simulated_density: SimulatedDensity,
    ) -> bool {
        match self {
            AppDensitySource::Platform(_) => false,
            AppDensitySource::Simulated(source) => {
                source.settings_mut().selected_density = simulated_density;
                true
            }
        }
    }
}

pub struct AppUpdateArgs<'a, 'b> {
    pub app_control: &'a mut AppControl,
    pub screen: ScreenState,
    pub canvas: CanvasScale,
    pub density: &'b DensityReading,
}

/// An app requires implementing the AppHandler.
///
/// `update` is called when winit provides a `winit::event::Event::MainEventsCleared` message, after
/// the scaler has been ticked for the frame.
pub trait AppHandler {
    /// Called frequently, this is the intended place to apply `canvas` to the UI
    fn update(
        &mut self,
        update_args: AppUpdateArgs,
    );

    fn fatal_error(
        &mut self,
        error: &AppError,
    );
}

/// Used to configure the app behavior and create the app
pub struct AppBuilder {
    inner_size: winit::dpi::Size,
    window_title: String,
    scaling_config: ScalingConfig,
    simulation: Option<SimulationSettings>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        AppBuilder::new()
    }
}

impl AppBuilder {
    /// Construct the app builder initialized with default options
    pub fn new() -> Self {
        AppBuilder {
            inner_size: winit::dpi::LogicalSize::new(900.0, 600.0).into(),
            window_title: "dpiscaler".to_string(),
            scaling_config: ScalingConfig::default(),
            simulation: None,
        }
    }

    /// Specifies the inner size of the window. Both physical and logical sizes are accepted.
    pub fn inner_size<S: Into<winit::dpi::Size>>(
        mut self,
        inner_size: S,
    ) -> Self {
        self.inner_size = inner_size.into();
        self
    }

    /// Specifies the title that the window will be created with
    pub fn window_title<T: Into<String>>(
        mut self,
        window_title: T,
    ) -> Self {
        self.window_title = window_title.into();
        self
    }

    /// Determine how the UI is scaled. Validated when the app starts.
    pub fn scaling_config(
        mut self,
        scaling_config: ScalingConfig,
    ) -> Self {
        self.scaling_config = scaling_config;
        self
    }

    /// Ignore the platform density and use a simulated one instead. Keys 1-5 pick a density from
    /// the menu while running.
    pub fn simulate(
        mut self,
        simulation: SimulationSettings,
    ) -> Self {
        self.simulation = Some(simulation);
        self
    }

    /// Start the app. `app_handler` must be an implementation of [AppHandler].
    /// This does not return because winit does not return. For consistency, we use the
    /// fatal_error() callback on the passed in AppHandler.
    pub fn run<T: 'static + AppHandler>(
        self,
        app_handler: T,
    ) -> ! {
        let density_source = match self.simulation {
            Some(simulation) => {
                AppDensitySource::Simulated(SimulatedDensitySource::new(simulation))
            }
            None => AppDensitySource::Platform(dpiscaler_winit::default_density_source()),
        };

        App::run(
            app_handler,
            self.inner_size,
            self.window_title,
            self.scaling_config,
            density_source,
        )
    }
}

/// Maps the number row to the operator density menu
pub fn simulated_density_for_key(key: VirtualKeyCode) -> Option<SimulatedDensity> {
    let index = match key {
        VirtualKeyCode::Key1 => 0,
        VirtualKeyCode::Key2 => 1,
        VirtualKeyCode::Key3 => 2,
        VirtualKeyCode::Key4 => 3,
        VirtualKeyCode::Key5 => 4,
        _ => return None,
    };

    SimulatedDensity::from_menu_index(index)
}

/// Constructed by `AppBuilder` which immediately calls `run`.
pub struct App {}

impl App {
    /// Runs the app. This is called by `AppBuilder::run`. This does not return because winit does
    /// not return. For consistency, we use the fatal_error() callback on the passed in AppHandler.
    pub fn run<T: 'static + AppHandler>(
        mut app_handler: T,
        inner_size: winit::dpi::Size,
        window_title: String,
        scaling_config: ScalingConfig,
        density_source: AppDensitySource,
    ) -> ! {
        let scaler_result = ScalerBuilder::new()
            .config(scaling_config)
            .build::<_, CanvasScale>(density_source);

        let mut scaler = match scaler_result {
            Ok(scaler) => scaler,
            Err(e) => {
                warn!("Passing ScalerBuilder::build() error to app {}", e);

                let app_error = e.into();
                app_handler.fatal_error(&app_error);

                // Exiting in this way is consistent with how we will exit if we fail within the
                // input loop
                std::process::exit(0);
            }
        };

        // Create the event loop
        let event_loop = winit::event_loop::EventLoop::<()>::with_user_event();

        // Create a single window
        let window_result = winit::window::WindowBuilder::new()
            .with_title(window_title)
            .with_inner_size(inner_size)
            .build(&event_loop);

        let window = match window_result {
            Ok(window) => window,
            Err(e) => {
                warn!("Passing WindowBuilder::build() error to app {}", e);

                let app_error = e.into();
                app_handler.fatal_error(&app_error);
                std::process::exit(0);
            }
        };

        let mut app_control = AppControl::default();
        scaler.activate(
            CanvasScale::default(),
            &WinitWindow::new(&window).screen_state(),
        );

        // To print the scale once per second
        let mut print_scale_event = PeriodicEvent::default();

        // Pass control of this thread to winit until the app terminates
        event_loop.run(move |event, _window_target, control_flow| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => app_control.enqueue_terminate_process(),
                Event::WindowEvent {
                    event:
                        WindowEvent::KeyboardInput {
                            input:
                                KeyboardInput {
                                    state: ElementState::Pressed,
                                    virtual_keycode: Some(key),
                                    ..
                                },
                            ..
                        },
                    ..
                } => {
                    if let Some(simulated_density) = simulated_density_for_key(key) {
                        app_control.enqueue_simulated_density(simulated_density);
                    }
                }
                Event::WindowEvent {
                    event: WindowEvent::Resized(_),
                    ..
                }
                | Event::WindowEvent {
                    event: WindowEvent::ScaleFactorChanged { .. },
                    ..
                } => {
                    scaler.tick(&WinitWindow::new(&window).screen_state());
                }
                Event::MainEventsCleared => {
                    if let Some(simulated_density) = app_control.take_simulated_density() {
                        if scaler
                            .density_source_mut()
                            .select_simulated_density(simulated_density)
                        {
                            info!("Simulating {} density", simulated_density);
                        } else {
                            debug!(
                                "Ignoring {} density request, simulation is off",
                                simulated_density
                            );
                        }
                    }

                    let screen = WinitWindow::new(&window).screen_state();
                    scaler.tick(&screen);

                    if print_scale_event.try_take_event(
                        std::time::Instant::now(),
                        std::time::Duration::from_secs(1),
                    ) {
                        debug!("{}", scaler.diagnostic());
                    }

                    app_handler.update(AppUpdateArgs {
                        app_control: &mut app_control,
                        screen,
                        canvas: scaler.target().copied().unwrap_or_default(),
                        density: scaler.last_reading(),
                    });
                }
                Event::LoopDestroyed => {
                    scaler.deactivate();
                }
                _ => {}
            }

            if app_control.should_terminate_process() {
                *control_flow = winit::event_loop::ControlFlow::Exit
            }
        });
    }
}
