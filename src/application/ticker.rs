use super::Speed;

/// Host-side gate deciding on which ticks a generation runs.
///
/// The counter advances on every tick; a generation runs only while the
/// session is started and the counter is a multiple of the speed value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ticker {
    ticks: u64,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, started: bool, speed: Speed) -> bool {
        self.ticks = self.ticks.wrapping_add(1);
        started && self.ticks % u64::from(speed.value()) == 0
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

/// Turns variable frame deltas into whole fixed-length steps.
#[derive(Clone, Copy, Debug)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedStep {
    /// Cap on steps per frame, so a long stall does not trigger a burst
    pub const DEFAULT_MAX_STEPS: u32 = 8;

    pub fn per_second(rate: u32) -> Self {
        Self {
            step: 1.0 / rate.max(1) as f32,
            accumulator: 0.0,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Feed one frame's elapsed seconds, get the number of steps to run
    pub fn steps(&mut self, delta: f32) -> u32 {
        self.accumulator += delta.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_steps {
            self.accumulator %= self.step;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_idle_never_fires() {
        let mut t = Ticker::new();
        assert!((0..100).all(|_| !t.tick(false, Speed::default())));
        assert_eq!(t.ticks(), 100);
    }

    #[test]
    fn test_ticker_fires_every_speed_ticks() {
        let mut t = Ticker::new();
        let fired = (0..60).filter(|_| t.tick(true, Speed::new(10))).count();
        assert_eq!(fired, 6);
    }

    #[test]
    fn test_ticker_fastest_speed() {
        let mut t = Ticker::new();
        let pattern: Vec<bool> = (0..4).map(|_| t.tick(true, Speed::new(Speed::MIN))).collect();
        assert_eq!(pattern, vec![false, true, false, true]);
    }

    #[test]
    fn test_ticker_reset_restarts_phase() {
        let mut t = Ticker::new();
        let speed = Speed::new(4);
        (0..6).for_each(|_| {
            t.tick(true, speed);
        });
        t.reset();
        assert_eq!(t.ticks(), 0);
        let pattern: Vec<bool> = (0..4).map(|_| t.tick(true, speed)).collect();
        assert_eq!(pattern, vec![false, false, false, true]);
    }

    #[test]
    fn test_fixed_step_accumulates() {
        let mut clock = FixedStep::per_second(10);
        assert_eq!(clock.steps(0.05), 0);
        assert_eq!(clock.steps(0.06), 1);
        assert_eq!(clock.steps(0.25), 2);
    }

    #[test]
    fn test_fixed_step_caps_after_stall() {
        let mut clock = FixedStep::per_second(60).with_max_steps(4);
        assert_eq!(clock.steps(5.0), 4);
        assert_eq!(clock.steps(0.0), 0);
    }
}
