//! Orbit path polylines in display space.
//!
//! Paths are sampled once per scale mode and cached. The elements used are
//! those current when the mode last changed; slow secular drift of the ellipse
//! between mode changes is not tracked.

use std::collections::HashMap;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::ephemeris::kepler::{orbital_plane_position, rotate_to_ecliptic, solve_fixed_point};
use crate::ephemeris::{CelestialBodyId, Ephemeris, MeanElements};
use crate::scaling::{ScaleMode, ScaleSettings, to_display};

/// Sampling parameters for orbit paths.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    /// Whether paths are drawn.
    pub visible: bool,
    /// Number of segments; the path has `segments + 1` points.
    pub segments: u32,
    /// Fixed-point refinement steps applied to each sample angle.
    pub refinement_iterations: u32,
    /// Line color as sRGB hex.
    pub color: u32,
    pub alpha: f32,
    /// Line color of the selected planet's orbit.
    pub selected_color: u32,
    pub selected_alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 180,
            refinement_iterations: 4,
            color: 0x444466,
            alpha: 0.15,
            selected_color: 0x88CCFF,
            selected_alpha: 0.9,
        }
    }
}

/// One revolution of an orbit, as display-space points (ecliptic axes).
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    pub mode: ScaleMode,
    pub points: Vec<DVec3>,
}

/// Sample a closed polyline approximating the orbit ellipse.
///
/// Sample angles run over `[0, 2π]` inclusive so the last point repeats the
/// first and the line closes without an extra segment.
pub fn sample_orbit_path(
    elements: &MeanElements,
    mode: ScaleMode,
    scale: &ScaleSettings,
    settings: &OrbitPathSettings,
) -> OrbitPath {
    let segments = settings.segments.max(3);
    let angles = elements.angles();
    let e = elements.e;

    let points = (0..=segments)
        .map(|step| {
            let theta = (step as f64 / segments as f64) * std::f64::consts::TAU;
            let e_anomaly = solve_fixed_point(theta, e, theta, settings.refinement_iterations);
            let plane = orbital_plane_position(elements.a, e, e_anomaly);
            let true_pos = rotate_to_ecliptic(
                plane,
                angles.argument_of_perihelion,
                angles.inclination,
                angles.long_node,
            );
            to_display(true_pos, mode, scale)
        })
        .collect();

    OrbitPath { mode, points }
}

/// Cached orbit paths for every body, valid for one scale mode.
#[derive(Resource, Default, Debug)]
pub struct OrbitPathCache {
    built_for: Option<ScaleMode>,
    paths: HashMap<CelestialBodyId, OrbitPath>,
}

impl OrbitPathCache {
    /// Mode the cached paths were sampled under, if any.
    pub fn mode(&self) -> Option<ScaleMode> {
        self.built_for
    }

    pub fn get(&self, id: CelestialBodyId) -> Option<&OrbitPath> {
        self.paths.get(&id)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Rebuild every path if `mode` differs from the cached mode.
    ///
    /// Returns `true` when the paths were regenerated.
    pub fn refresh(
        &mut self,
        mode: ScaleMode,
        epoch_days: f64,
        ephemeris: &Ephemeris,
        scale: &ScaleSettings,
        settings: &OrbitPathSettings,
    ) -> bool {
        if self.built_for == Some(mode) {
            return false;
        }
        self.rebuild(mode, epoch_days, ephemeris, scale, settings);
        true
    }

    /// Unconditionally resample every path.
    pub fn rebuild(
        &mut self,
        mode: ScaleMode,
        epoch_days: f64,
        ephemeris: &Ephemeris,
        scale: &ScaleSettings,
        settings: &OrbitPathSettings,
    ) {
        self.paths.clear();
        for body in ephemeris.bodies() {
            let elements = body.elements.at_epoch(epoch_days);
            self.paths
                .insert(body.id, sample_orbit_path(&elements, mode, scale, settings));
        }
        self.built_for = Some(mode);
    }
}
