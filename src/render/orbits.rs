//! Orbit path rendering using Bevy Gizmos.
//!
//! Paths come from [`OrbitPathCache`], which is resampled only when the scale
//! mode changes. Orbits share one faint color; the selected one stands out.

use bevy::prelude::*;

use crate::ephemeris::Ephemeris;
use crate::orbit_path::{OrbitPathCache, OrbitPathSettings};
use crate::render::SelectedBody;
use crate::render::hex_color;
use crate::scaling::{ScaleMode, ScaleSettings, ecliptic_to_render};
use crate::time::SimulationClock;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .init_resource::<OrbitPathCache>();
    }
}

/// Resample all orbit paths when the active scale mode differs from the cache.
pub fn refresh_orbit_paths(
    mut cache: ResMut<OrbitPathCache>,
    mode: Res<ScaleMode>,
    clock: Res<SimulationClock>,
    ephemeris: Res<Ephemeris>,
    scale: Res<ScaleSettings>,
    settings: Res<OrbitPathSettings>,
) {
    if cache.refresh(*mode, clock.epoch(), &ephemeris, &scale, &settings) {
        info!(
            "Rebuilt {} orbit paths for {} at day {:.1}",
            cache.len(),
            mode.label(),
            clock.epoch()
        );
    }
}

/// Draw every cached orbit path as a line strip.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    cache: Res<OrbitPathCache>,
    ephemeris: Res<Ephemeris>,
    selected: Res<SelectedBody>,
) {
    if !settings.visible {
        return;
    }

    for body in ephemeris.bodies() {
        let Some(path) = cache.get(body.id) else {
            continue;
        };
        let color = orbit_line_color(&settings, selected.is(body.id));
        gizmos.linestrip(path.points.iter().map(|p| ecliptic_to_render(*p)), color);
    }
}

/// Color of an orbit line.
pub fn orbit_line_color(settings: &OrbitPathSettings, selected: bool) -> Color {
    if selected {
        hex_color(settings.selected_color).with_alpha(settings.selected_alpha)
    } else {
        hex_color(settings.color).with_alpha(settings.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_orbit_stands_out() {
        let settings = OrbitPathSettings::default();
        let plain = orbit_line_color(&settings, false);
        let selected = orbit_line_color(&settings, true);
        assert_eq!(plain, Color::srgba_u8(0x44, 0x44, 0x66, 0).with_alpha(0.15));
        assert_eq!(selected, Color::srgba_u8(0x88, 0xCC, 0xFF, 0).with_alpha(0.9));
        assert!(selected.alpha() > plain.alpha());
    }
}
