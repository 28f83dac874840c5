//! Simulated clock for the orrery.
//!
//! The epoch is days since J2000 and is owned here; every other system reads
//! it. Speed is simulated days per real second.

use bevy::prelude::*;

use crate::types::{CalendarDate, DAYS_PER_MONTH, DAYS_PER_YEAR, current_j2000_days};

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .init_resource::<TimeSettings>()
            .add_systems(Update, advance_time);
    }
}

/// Whether the clock advances on `tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockState {
    #[default]
    Running,
    Paused,
}

/// Bounds and step sizes for user-driven clock changes.
#[derive(Resource, Clone, Debug)]
pub struct TimeSettings {
    /// Upper bound of the speed slider, days per second
    pub max_speed: f64,
    /// Speed change per arrow-key press, days per second
    pub speed_step: f64,
    /// Days moved by a year jump
    pub year_jump_days: f64,
    /// Days moved by a month jump
    pub month_jump_days: f64,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            max_speed: 365.0,
            speed_step: 5.0,
            year_jump_days: DAYS_PER_YEAR,
            month_jump_days: DAYS_PER_MONTH,
        }
    }
}

/// The simulation epoch and how it advances.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationClock {
    epoch: f64,
    speed: f64,
    state: ClockState,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            epoch: 0.0,
            speed: 1.0,
            state: ClockState::Running,
        }
    }
}

impl SimulationClock {
    /// Running clock at the given epoch, at one day per second.
    pub fn at_epoch(days: f64) -> Self {
        let mut clock = Self::default();
        clock.set_epoch(days);
        clock
    }

    /// Current epoch in days since J2000.
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    /// Calendar date containing the current epoch.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_j2000_days(self.epoch)
    }

    pub fn pause(&mut self) {
        self.state = ClockState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = ClockState::Running;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            ClockState::Running => ClockState::Paused,
            ClockState::Paused => ClockState::Running,
        };
    }

    /// Advance by `dt_seconds` of real time. No effect while paused.
    pub fn tick(&mut self, dt_seconds: f64) {
        if self.state == ClockState::Paused {
            return;
        }
        let advanced = self.epoch + dt_seconds * self.speed;
        if advanced.is_finite() {
            self.epoch = advanced;
        }
    }

    /// Jump to an absolute epoch. Non-finite values are ignored.
    pub fn set_epoch(&mut self, days: f64) {
        if days.is_finite() {
            self.epoch = days;
        }
    }

    /// Jump to midnight UTC of a calendar date.
    pub fn set_date(&mut self, date: CalendarDate) {
        self.set_epoch(date.days_since_j2000() as f64);
    }

    /// Move the epoch by a signed number of days.
    pub fn shift(&mut self, delta_days: f64) {
        self.set_epoch(self.epoch + delta_days);
    }

    /// Jump to the wall-clock present.
    pub fn jump_to_today(&mut self) {
        self.set_epoch(current_j2000_days());
    }

    /// Set speed in days per second. Negative speeds clamp to zero, and
    /// non-finite values stop the clock's advance.
    pub fn set_speed(&mut self, days_per_second: f64) {
        self.speed = if days_per_second.is_finite() {
            days_per_second.max(0.0)
        } else {
            0.0
        };
    }
}

/// Advance the simulation epoch by the frame's real elapsed time.
pub fn advance_time(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_clock() {
        let clock = SimulationClock::default();
        assert_eq!(clock.epoch(), 0.0);
        assert_eq!(clock.speed(), 1.0);
        assert_eq!(clock.state(), ClockState::Running);
        assert_eq!(clock.date(), CalendarDate::J2000);
    }

    #[test]
    fn test_tick_scales_by_speed() {
        let mut clock = SimulationClock::default();
        clock.set_speed(10.0);
        clock.tick(0.5);
        assert_eq!(clock.epoch(), 5.0);
    }

    #[test]
    fn test_paused_clock_does_not_move() {
        let mut clock = SimulationClock::at_epoch(100.0);
        clock.pause();
        clock.tick(10.0);
        assert_eq!(clock.epoch(), 100.0);
        clock.toggle();
        assert!(!clock.is_paused());
        clock.tick(1.0);
        assert_eq!(clock.epoch(), 101.0);
    }

    #[test]
    fn test_zero_speed_holds_epoch_while_running() {
        let mut clock = SimulationClock::at_epoch(42.0);
        clock.set_speed(0.0);
        for _ in 0..100 {
            clock.tick(0.016);
        }
        assert_eq!(clock.epoch(), 42.0);
        assert_eq!(clock.state(), ClockState::Running);
    }

    #[test]
    fn test_set_then_read_is_exact() {
        let mut clock = SimulationClock::default();
        for days in [0.0, -73048.25, 8766.123456789, 1.0e7] {
            clock.set_epoch(days);
            assert_eq!(clock.epoch(), days);
        }
    }

    #[test]
    fn test_shift_round_trip() {
        let mut clock = SimulationClock::at_epoch(9000.0);
        clock.shift(DAYS_PER_YEAR);
        clock.shift(DAYS_PER_YEAR);
        clock.shift(-730.5);
        assert_eq!(clock.epoch(), 9000.0);

        clock.shift(123.456);
        clock.shift(-123.456);
        assert_relative_eq!(clock.epoch(), 9000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_set_date_lands_on_midnight() {
        let mut clock = SimulationClock::default();
        clock.set_date(CalendarDate::new(2024, 7, 4).unwrap());
        assert_eq!(clock.epoch(), 8951.0);
        assert_eq!(clock.date().to_string(), "2024-07-04");
    }

    #[test]
    fn test_speed_clamps_and_rejects_non_finite() {
        let mut clock = SimulationClock::default();
        clock.set_speed(-3.0);
        assert_eq!(clock.speed(), 0.0);
        clock.set_speed(f64::NAN);
        assert_eq!(clock.speed(), 0.0);
        clock.set_speed(1000.0);
        assert_eq!(clock.speed(), 1000.0);
    }

    #[test]
    fn test_non_finite_epoch_is_ignored() {
        let mut clock = SimulationClock::at_epoch(12.0);
        clock.set_epoch(f64::NAN);
        clock.shift(f64::INFINITY);
        assert_eq!(clock.epoch(), 12.0);
    }

    #[test]
    fn test_far_epoch_still_has_a_date() {
        let mut clock = SimulationClock::at_epoch(0.0);
        clock.set_epoch(1.0e19);
        assert_eq!(clock.epoch(), 1.0e19);
        assert!(clock.date().year > 0);
        clock.set_epoch(-1.0e19);
        assert!(clock.date().year < 0);
    }

    #[test]
    fn test_jump_to_today_is_after_2020() {
        let mut clock = SimulationClock::default();
        clock.jump_to_today();
        // 2020-01-01 is day 7305 after J2000.
        assert!(clock.epoch() > 7305.0);
    }
}
