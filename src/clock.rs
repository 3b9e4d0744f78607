/// Turns display-refresh timestamps (milliseconds) into per-frame deltas (seconds).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick; 0.0 on the first tick or if time went backwards.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let elapsed = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_no_elapsed_time() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
        assert_eq!(clock.tick(12_395.0), 0.05);
    }

    #[test]
    fn backwards_timestamps_clamp_to_zero() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        assert_eq!(clock.tick(900.0), 0.0);
        assert_eq!(clock.tick(1900.0), 1.0);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        clock.reset();
        assert_eq!(clock.tick(5000.0), 0.0);
    }
}
