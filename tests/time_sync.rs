//! The simulated epoch depends only on elapsed real time and speed, not on
//! how that time is split into frames, and jumps compose exactly.
//!
//! Run with: cargo test --test time_sync

use approx::assert_relative_eq;
use orrery::ephemeris::{CelestialBodyId, Ephemeris};
use orrery::time::SimulationClock;
use orrery::types::{CalendarDate, DAYS_PER_MONTH, DAYS_PER_YEAR};

fn run_at_fps(fps: u32, seconds: u32, speed: f64) -> f64 {
    let mut clock = SimulationClock::default();
    clock.set_speed(speed);
    let dt = 1.0 / fps as f64;
    for _ in 0..fps * seconds {
        clock.tick(dt);
    }
    clock.epoch()
}

// ============================================================================
// Frame-rate independence
// ============================================================================

#[test]
fn test_epoch_independent_of_frame_rate() {
    let reference = run_at_fps(1, 10, 30.0);
    assert_eq!(reference, 300.0);
    for fps in [24, 30, 60, 144] {
        let epoch = run_at_fps(fps, 10, 30.0);
        assert_relative_eq!(epoch, reference, epsilon = 1e-6);
    }
}

#[test]
fn test_positions_match_across_frame_rates() {
    let eph = Ephemeris::new();
    let slow = run_at_fps(30, 4, 365.0);
    let fast = run_at_fps(120, 4, 365.0);
    for &id in CelestialBodyId::PLANETS {
        let a = eph.position(id, slow).unwrap();
        let b = eph.position(id, fast).unwrap();
        assert!((a - b).length() < 1e-6, "{id} diverged by {}", (a - b).length());
    }
}

// ============================================================================
// Jumps
// ============================================================================

#[test]
fn test_year_jumps_compose_exactly() {
    let mut clock = SimulationClock::at_epoch(-4000.0);
    clock.shift(DAYS_PER_YEAR);
    clock.shift(DAYS_PER_YEAR);
    clock.shift(-730.5);
    assert_eq!(clock.epoch(), -4000.0);
}

#[test]
fn test_month_jumps_round_trip() {
    let mut clock = SimulationClock::at_epoch(12_345.678);
    for _ in 0..12 {
        clock.shift(DAYS_PER_MONTH);
    }
    for _ in 0..12 {
        clock.shift(-DAYS_PER_MONTH);
    }
    assert_relative_eq!(clock.epoch(), 12_345.678, epsilon = 1e-9);
}

#[test]
fn test_jump_while_running_continues_from_new_epoch() {
    let mut clock = SimulationClock::default();
    clock.set_speed(2.0);
    clock.tick(1.0);
    clock.set_date(CalendarDate::new(1969, 7, 20).unwrap());
    let landing = clock.epoch();
    clock.tick(0.5);
    assert_eq!(clock.epoch(), landing + 1.0);
    assert_eq!(clock.date().to_string(), "1969-07-21");
}
