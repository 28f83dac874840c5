//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orrery::ephemeris::Ephemeris;
use orrery::orbit_path::{OrbitPathCache, OrbitPathSettings};
use orrery::render::{LabelSettings, SelectedBody, StarfieldSettings};
use orrery::scaling::{ScaleMode, ScaleSettings};
use orrery::time::{SimulationClock, TimeSettings};

/// Real seconds per frame in headless apps built by [`stepped_app`].
pub const FRAME_SECONDS: f64 = 0.1;

/// Minimal headless app with every engine resource at its default.
pub fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<Ephemeris>()
        .init_resource::<SimulationClock>()
        .init_resource::<TimeSettings>()
        .init_resource::<ScaleMode>()
        .init_resource::<ScaleSettings>()
        .init_resource::<OrbitPathSettings>()
        .init_resource::<OrbitPathCache>()
        .init_resource::<SelectedBody>()
        .init_resource::<LabelSettings>()
        .init_resource::<StarfieldSettings>();
    app
}

/// Headless app whose `Time` advances by exactly [`FRAME_SECONDS`] per update.
///
/// The first update only primes the clock; call [`prime`] before counting frames.
pub fn stepped_app() -> App {
    let mut app = create_minimal_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        FRAME_SECONDS,
    )));
    app
}

/// Run the zero-delta first frame.
pub fn prime(app: &mut App) {
    app.update();
}

/// Run `n` frames.
pub fn run_frames(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}

pub fn clock(app: &App) -> &SimulationClock {
    app.world().resource::<SimulationClock>()
}

pub fn clock_mut(app: &mut App) -> Mut<'_, SimulationClock> {
    app.world_mut().resource_mut::<SimulationClock>()
}
