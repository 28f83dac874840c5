//! Rendering systems for the orrery.
//!
//! Spawns the Sun, planets and background stars, moves planets to their
//! propagated display positions each frame, and draws orbit paths and labels.

pub mod background;
pub mod bodies;
pub mod highlight;
pub mod labels;
pub mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::{CelestialBodyPlugin, spin_bodies, sync_body_positions};
use self::highlight::HighlightPlugin;
use self::labels::LabelPlugin;
use self::orbits::{OrbitPathPlugin, draw_orbit_paths, refresh_orbit_paths};
use crate::time::advance_time;

pub use self::background::StarfieldSettings;
pub use self::bodies::{CelestialBody, Sun};
pub use self::highlight::SelectedBody;
pub use self::labels::LabelSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CelestialBodyPlugin,
            OrbitPathPlugin,
            HighlightPlugin,
            LabelPlugin,
            BackgroundPlugin,
        ))
            // Every frame reads one epoch, after the clock has moved:
            // 1. refresh_orbit_paths - resample paths if the scale mode changed
            // 2. sync_body_positions - propagate and place bodies
            // 3. spin_bodies - cosmetic axial rotation
            // 4. draw_orbit_paths - gizmo lines from the cache
            .add_systems(
                Update,
                (
                    refresh_orbit_paths,
                    sync_body_positions,
                    spin_bodies,
                    draw_orbit_paths,
                )
                    .chain()
                    .after(advance_time),
            );
    }
}

/// Convert a `0xRRGGBB` value to a Bevy color.
pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_channels() {
        assert_eq!(hex_color(0xFF8000), Color::srgb_u8(255, 128, 0));
        assert_eq!(hex_color(0x000000), Color::srgb_u8(0, 0, 0));
    }
}
