//! Display-scale mapping from true heliocentric distance to render units.
//!
//! Only the radial magnitude is remapped. The direction of every position is
//! preserved, so a body always sits on the same ray from the Sun in both
//! modes and orbit order can never invert.

use bevy::math::{DVec3, Vec3};
use bevy::prelude::*;

/// How true distances are mapped to the screen.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Linear: `r × real_multiplier`.
    Real,
    /// Power-law compression so inner and outer planets are visible together.
    #[default]
    Visual,
}

impl ScaleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ScaleMode::Real => ScaleMode::Visual,
            ScaleMode::Visual => ScaleMode::Real,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleMode::Real => "Real scale",
            ScaleMode::Visual => "Visual scale",
        }
    }

    /// Display radius (render units) for a true distance `r` in AU.
    ///
    /// Strictly increasing for `r ≥ 0` as long as the settings are positive.
    pub fn display_radius(self, r: f64, settings: &ScaleSettings) -> f64 {
        match self {
            ScaleMode::Real => r * settings.real_multiplier,
            ScaleMode::Visual => {
                settings.visual_offset + r.powf(settings.visual_exponent) * settings.visual_multiplier
            }
        }
    }
}

/// Constants of both scale functions.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ScaleSettings {
    /// Render units per AU in `Real` mode.
    pub real_multiplier: f64,
    /// Radius of the innermost possible orbit in `Visual` mode.
    pub visual_offset: f64,
    /// Compression exponent in `Visual` mode (0 < p < 1 compresses).
    pub visual_exponent: f64,
    /// Multiplier on `r^p` in `Visual` mode.
    pub visual_multiplier: f64,
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            real_multiplier: 1200.0,
            visual_offset: 80.0,
            visual_exponent: 0.65,
            visual_multiplier: 150.0,
        }
    }
}

/// Map a heliocentric position (AU) into display space along the same direction.
///
/// A body at the origin (or with a non-finite radius) has no direction; it
/// maps to the origin instead of producing NaN.
pub fn to_display(position: DVec3, mode: ScaleMode, settings: &ScaleSettings) -> DVec3 {
    let r = position.length();
    if !(r > 0.0 && r.is_finite()) {
        return DVec3::ZERO;
    }
    position * (mode.display_radius(r, settings) / r)
}

/// Ecliptic (x, y, z) with z toward the north ecliptic pole, to the Y-up
/// render frame: ecliptic z becomes render y, ecliptic y becomes render −z.
pub fn ecliptic_to_render(v: DVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.z as f32, -v.y as f32)
}
