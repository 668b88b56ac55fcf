//! Day/night cycle
//!
//! Time of day is a fraction in [0, 1): night until 0.2, sunrise to
//! 0.3, day to 0.7, sunset to 0.8, then night again. One full cycle
//! takes DAY_LENGTH_SECS of game time.

use crate::constants::timing::DAY_LENGTH_SECS;

pub struct DayNightCycle {
    time: f32,
}

impl DayNightCycle {
    /// Starts at early morning
    pub fn new() -> Self {
        Self { time: 0.3 }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time.rem_euclid(1.0);
    }

    pub fn advance(&mut self, dt: f32) {
        self.time = (self.time + dt / DAY_LENGTH_SECS).rem_euclid(1.0);
    }

    pub fn is_night(&self) -> bool {
        self.time < 0.2 || self.time >= 0.8
    }

    pub fn is_sunrise(&self) -> bool {
        (0.2..0.3).contains(&self.time)
    }

    pub fn is_day(&self) -> bool {
        (0.3..0.7).contains(&self.time)
    }

    pub fn is_sunset(&self) -> bool {
        (0.7..0.8).contains(&self.time)
    }

    pub fn set_midnight(&mut self) {
        self.time = 0.0;
    }

    pub fn set_sunrise(&mut self) {
        self.time = 0.25;
    }

    pub fn set_noon(&mut self) {
        self.time = 0.5;
    }

    pub fn set_sunset(&mut self) {
        self.time = 0.75;
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_partition_the_cycle() {
        let mut cycle = DayNightCycle::new();
        for step in 0..100 {
            cycle.set_time(step as f32 / 100.0);
            let phases = [
                cycle.is_night(),
                cycle.is_sunrise(),
                cycle.is_day(),
                cycle.is_sunset(),
            ];
            assert_eq!(
                phases.iter().filter(|p| **p).count(),
                1,
                "exactly one phase at t={}",
                cycle.time()
            );
        }
    }

    #[test]
    fn advance_wraps_past_one() {
        let mut cycle = DayNightCycle::new();
        cycle.set_time(0.95);
        cycle.advance(0.1 * DAY_LENGTH_SECS);
        assert!((cycle.time() - 0.05).abs() < 1e-4);
    }

    #[test]
    fn full_day_takes_the_configured_length() {
        let mut cycle = DayNightCycle::new();
        cycle.set_midnight();
        cycle.advance(DAY_LENGTH_SECS / 2.0);
        assert!(cycle.is_day());
        assert!((cycle.time() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn setters_land_in_their_phase() {
        let mut cycle = DayNightCycle::new();
        cycle.set_midnight();
        assert!(cycle.is_night());
        cycle.set_sunrise();
        assert!(cycle.is_sunrise());
        cycle.set_noon();
        assert!(cycle.is_day());
        cycle.set_sunset();
        assert!(cycle.is_sunset());
    }
}
