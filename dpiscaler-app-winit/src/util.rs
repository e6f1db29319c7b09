//! Handy utilities

/// Useful for cases where you want to do something once per time interval, like logging the
/// current scale without flooding the log every frame.
#[derive(Default)]
pub struct PeriodicEvent {
    last_time_triggered: Option<std::time::Instant>,
}

impl PeriodicEvent {
    /// Call try_take_event to see if the required time has elapsed. It will return true only once
    /// enough time has passed since it last returned true.
    pub fn try_take_event(
        &mut self,
        current_time: std::time::Instant,
        wait_duration: std::time::Duration,
    ) -> bool {
        match self.last_time_triggered {
            Some(last_time_triggered) if current_time - last_time_triggered < wait_duration => {
                false
            }
            _ => {
                self.last_time_triggered = Some(current_time);
                true
            }
        }
    }
}
