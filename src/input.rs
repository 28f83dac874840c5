//! Keyboard shortcuts for the clock, scale mode, selection and overlays.

use bevy::prelude::*;
use bevy_egui::input::egui_wants_any_keyboard_input;

use crate::camera::{CameraSettings, CameraState};
use crate::ephemeris::CelestialBodyId;
use crate::orbit_path::OrbitPathSettings;
use crate::render::{LabelSettings, SelectedBody, StarfieldSettings};
use crate::scaling::ScaleMode;
use crate::time::{SimulationClock, TimeSettings, advance_time};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                keyboard_shortcuts.before(advance_time),
                keyboard_zoom,
            )
                .run_if(not(egui_wants_any_keyboard_input)),
        );
    }
}

/// One user command, independent of the key that triggered it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shortcut {
    TogglePause,
    /// Move the epoch by a signed number of days.
    Shift(f64),
    Today,
    /// Change speed by a signed step, days per second.
    Speed(f64),
    ToggleScale,
    /// Select a planet, or clear the selection and return the view to the Sun.
    Select(Option<CelestialBodyId>),
    ToggleOrbits,
    ToggleLabels,
    ToggleStars,
}

/// Overlay visibility the shortcuts can flip.
pub struct Overlays<'a> {
    pub orbits: &'a mut OrbitPathSettings,
    pub labels: &'a mut LabelSettings,
    pub stars: &'a mut StarfieldSettings,
}

const DIGITS: [KeyCode; 9] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

/// Shortcuts for every key pressed this frame.
pub fn shortcuts_from_keys(keys: &ButtonInput<KeyCode>, settings: &TimeSettings) -> Vec<Shortcut> {
    let mut out = Vec::new();
    let bindings = [
        (KeyCode::Space, Shortcut::TogglePause),
        (KeyCode::BracketLeft, Shortcut::Shift(-settings.year_jump_days)),
        (KeyCode::BracketRight, Shortcut::Shift(settings.year_jump_days)),
        (KeyCode::Comma, Shortcut::Shift(-settings.month_jump_days)),
        (KeyCode::Period, Shortcut::Shift(settings.month_jump_days)),
        (KeyCode::KeyT, Shortcut::Today),
        (KeyCode::ArrowUp, Shortcut::Speed(settings.speed_step)),
        (KeyCode::ArrowDown, Shortcut::Speed(-settings.speed_step)),
        (KeyCode::KeyV, Shortcut::ToggleScale),
        (KeyCode::KeyO, Shortcut::ToggleOrbits),
        (KeyCode::KeyL, Shortcut::ToggleLabels),
        (KeyCode::KeyG, Shortcut::ToggleStars),
        (KeyCode::KeyR, Shortcut::Select(None)),
    ];
    for (key, shortcut) in bindings {
        if keys.just_pressed(key) {
            out.push(shortcut);
        }
    }
    for (n, key) in DIGITS.into_iter().enumerate() {
        if keys.just_pressed(key) {
            out.push(Shortcut::Select(CelestialBodyId::from_ordinal(n)));
        }
    }
    out
}

/// Apply one shortcut to the simulation state.
pub fn apply_shortcut(
    shortcut: Shortcut,
    clock: &mut SimulationClock,
    settings: &TimeSettings,
    mode: &mut ScaleMode,
    selected: &mut SelectedBody,
    overlays: Overlays,
) {
    match shortcut {
        Shortcut::TogglePause => {
            clock.toggle();
            info!("Simulation {}", if clock.is_paused() { "paused" } else { "running" });
        }
        Shortcut::Shift(days) => {
            clock.shift(days);
            info!("Jumped {:+.2} days to {}", days, clock.date());
        }
        Shortcut::Today => {
            clock.jump_to_today();
            info!("Jumped to today ({})", clock.date());
        }
        Shortcut::Speed(step) => {
            clock.set_speed((clock.speed() + step).clamp(0.0, settings.max_speed));
            info!("Speed: {} days/s", clock.speed());
        }
        Shortcut::ToggleScale => {
            *mode = mode.toggled();
            info!("{}", mode.label());
        }
        Shortcut::Select(id) => selected.id = id,
        Shortcut::ToggleOrbits => {
            let orbits = overlays.orbits;
            orbits.visible = !orbits.visible;
            info!("Orbit paths {}", shown(orbits.visible));
        }
        Shortcut::ToggleLabels => {
            let labels = overlays.labels;
            labels.visible = !labels.visible;
            info!("Planet labels {}", shown(labels.visible));
        }
        Shortcut::ToggleStars => {
            let stars = overlays.stars;
            stars.visible = !stars.visible;
            info!("Background stars {}", shown(stars.visible));
        }
    }
}

fn shown(visible: bool) -> &'static str {
    if visible { "shown" } else { "hidden" }
}

/// Handle keyboard shortcuts for simulation control.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<TimeSettings>,
    mut clock: ResMut<SimulationClock>,
    mut mode: ResMut<ScaleMode>,
    mut selected: ResMut<SelectedBody>,
    mut orbits: ResMut<OrbitPathSettings>,
    mut labels: ResMut<LabelSettings>,
    mut stars: ResMut<StarfieldSettings>,
) {
    for shortcut in shortcuts_from_keys(&keys, &settings) {
        apply_shortcut(
            shortcut,
            &mut clock,
            &settings,
            &mut mode,
            &mut selected,
            Overlays {
                orbits: &mut orbits,
                labels: &mut labels,
                stars: &mut stars,
            },
        );
    }
}

/// Plus/minus zoom while held.
fn keyboard_zoom(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<CameraSettings>,
    camera_state: Option<ResMut<CameraState>>,
) {
    let Some(mut camera_state) = camera_state else {
        return;
    };
    // Plus/Equal: zoom in
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        camera_state.zoom_by(1.0 - settings.zoom_speed, &settings);
    }
    // Minus: zoom out
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        camera_state.zoom_by(1.0 + settings.zoom_speed, &settings);
    }
}
