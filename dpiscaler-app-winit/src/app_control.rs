use dpiscaler_core::SimulatedDensity;

/// Requests from the app handler to the host loop. They're acted on after `update` returns.
#[derive(Default)]
pub struct AppControl {
    /// If true, the application will quit when the next frame ends
    should_terminate_process: bool,

    /// If set, the simulated density switches to this before the next evaluation
    requested_simulated_density: Option<SimulatedDensity>,
}

impl AppControl {
    /// Direct the application to terminate at the end of the next frame
    pub fn enqueue_terminate_process(&mut self) {
        self.should_terminate_process = true;
    }

    /// Returns true iff `enqueue_terminate_process` is called, indicating that the app should terminate
    pub fn should_terminate_process(&self) -> bool {
        self.should_terminate_process
    }

    /// Pick a density from the operator menu. Ignored unless the app was built with simulation
    /// enabled.
    pub fn enqueue_simulated_density(
        &mut self,
        simulated_density: SimulatedDensity,
    ) {
        self.requested_simulated_density = Some(simulated_density);
    }

    /// Returns the pending density request, clearing it
    pub fn take_simulated_density(&mut self) -> Option<SimulatedDensity> {
        self.requested_simulated_density.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_density_request_is_taken_once() {
        let mut app_control = AppControl::default();
        assert_eq!(app_control.take_simulated_density(), None);

        app_control.enqueue_simulated_density(SimulatedDensity::Two);
        app_control.enqueue_simulated_density(SimulatedDensity::Three);
        assert_eq!(app_control.take_simulated_density(), Some(SimulatedDensity::Three));
        assert_eq!(app_control.take_simulated_density(), None);
    }

    #[test]
    fn test_terminate() {
        let mut app_control = AppControl::default();
        assert!(!app_control.should_terminate_process());
        app_control.enqueue_terminate_process();
        assert!(app_control.should_terminate_process());
    }
}
