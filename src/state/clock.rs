use std::time::Duration;

/// Drives the once-per-second drawing timer.
///
/// Instead of owning a timer handle, the clock only remembers when the
/// session started; the displayed value is derived from that timestamp and
/// the caller schedules the next repaint with [`SessionClock::until_next_tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionClock {
    started_at: Option<f64>,
}

impl SessionClock {
    /// Start the clock at `now` unless it is already running.
    ///
    /// Returns true if this call started it.
    pub fn start(&mut self, now: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    /// Whole seconds since the clock started, or 0 when stopped
    pub fn elapsed_secs(&self, now: f64) -> u64 {
        match self.started_at {
            Some(start) => (now - start).max(0.0).floor() as u64,
            None => 0,
        }
    }

    /// Delay until the elapsed seconds next change, or `None` when stopped
    pub fn until_next_tick(&self, now: f64) -> Option<Duration> {
        let start = self.started_at?;
        let elapsed = (now - start).max(0.0);
        let remaining = 1.0 - elapsed.fract();
        Some(Duration::from_secs_f64(remaining.clamp(0.001, 1.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_clock() {
        let clock = SessionClock::default();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_secs(100.0), 0);
        assert_eq!(clock.until_next_tick(100.0), None);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut clock = SessionClock::default();
        assert!(clock.start(10.0));
        assert!(!clock.start(15.0));
        assert_eq!(clock.started_at(), Some(10.0));
    }

    #[test]
    fn test_elapsed_has_second_granularity() {
        let mut clock = SessionClock::default();
        clock.start(10.0);
        assert_eq!(clock.elapsed_secs(10.0), 0);
        assert_eq!(clock.elapsed_secs(10.99), 0);
        assert_eq!(clock.elapsed_secs(11.0), 1);
        assert_eq!(clock.elapsed_secs(13.5), 3);
        // Clock skew never produces a negative reading
        assert_eq!(clock.elapsed_secs(9.0), 0);
    }

    #[test]
    fn test_until_next_tick() {
        let mut clock = SessionClock::default();
        clock.start(10.0);
        let delay = clock.until_next_tick(10.25).unwrap();
        assert!((delay.as_secs_f64() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_cancel() {
        let mut clock = SessionClock::default();
        clock.start(1.0);
        clock.cancel();
        assert!(!clock.is_running());
        assert!(clock.start(5.0));
    }
}
