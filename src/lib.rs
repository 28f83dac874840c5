//! Orrery - time-scrubbable model of the solar system
//!
//! Planet positions come from J2000 mean Keplerian elements with linear
//! secular rates, propagated to any epoch and mapped into a real or
//! compressed display scale. The Bevy plugins drive a simulated clock and
//! render the result.

pub mod camera;
pub mod ephemeris;
pub mod input;
pub mod orbit_path;
pub mod render;
pub mod scaling;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

use camera::CameraPlugin;
use ephemeris::Ephemeris;
use input::InputPlugin;
use render::RenderPlugin;
use scaling::{ScaleMode, ScaleSettings};
use time::TimePlugin;
use ui::UiPlugin;

/// Everything except the window and egui: resources, clock, rendering,
/// camera, keyboard and the time panel.
///
/// Settings resources inserted before this plugin are kept.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Ephemeris>()
            .init_resource::<ScaleMode>()
            .init_resource::<ScaleSettings>()
            .add_plugins((TimePlugin, RenderPlugin, CameraPlugin, InputPlugin, UiPlugin));
    }
}
