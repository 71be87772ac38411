/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Held-key flags consumed by the per-tick step
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub throttle: bool,
    pub brake: bool,
    pub horn: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Run score
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, points: u32) {
        self.points += points;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub crashed: bool,
    pub cars_passed: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator for spawn sampling
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Fixed-interval accumulator driving traffic spawns.
///
/// Replaces an OS timer: it only advances while the session ticks it, so
/// spawning stops the instant simulation stops.
#[derive(Debug, Clone, Copy)]
pub struct SpawnTimer {
    pub elapsed: f32,
    pub interval: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            elapsed: 0.0,
            interval,
        }
    }

    /// Advance the timer; true when the interval elapsed.
    ///
    /// Fires at most once per call and carries at most one interval of
    /// backlog, so a long stall cannot burst-fire.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = (self.elapsed - self.interval).min(self.interval);
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Scrolling-road offset, wrapped to [0, screen height)
#[derive(Debug, Clone, Copy, Default)]
pub struct RoadScroll {
    pub offset: f32,
}

impl RoadScroll {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_award_accumulates() {
        let mut score = Score::new();
        score.award(10);
        score.award(10);
        assert_eq!(score.points, 20);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.crashed = true;
        events.cars_passed = 3;

        events.clear();

        assert!(!events.crashed);
        assert_eq!(events.cars_passed, 0);
    }

    #[test]
    fn test_input_state_clear() {
        let mut input = InputState::new();
        input.left = true;
        input.horn = true;

        input.clear();

        assert!(!input.left && !input.horn);
    }

    #[test]
    fn test_spawn_timer_fires_on_interval() {
        let mut timer = SpawnTimer::new(2.0);
        assert!(!timer.tick(1.0));
        assert!(!timer.tick(0.9));
        assert!(timer.tick(0.2), "Fires once 2.0s have accumulated");
        assert!(!timer.tick(0.1), "Remainder carries over without refiring");
    }

    #[test]
    fn test_spawn_timer_does_not_burst_after_stall() {
        let mut timer = SpawnTimer::new(2.0);
        assert!(timer.tick(30.0));
        // Backlog is capped at one interval: the next fire needs no
        // additional time, but the one after does.
        assert!(timer.tick(0.0));
        assert!(!timer.tick(0.0));
    }

    #[test]
    fn test_spawn_timer_reset_discards_progress() {
        let mut timer = SpawnTimer::new(2.0);
        timer.tick(1.9);
        timer.reset();
        assert!(!timer.tick(1.9));
        assert!(timer.tick(0.1));
    }
}
