//! Keplerian mean elements with linear secular rates.
//!
//! Elements are given at J2000 in the units of the JPL "approximate positions
//! of the planets" tables: AU for the semi-major axis, degrees for every
//! angle, and rates per Julian century.

use crate::types::{DEG_TO_RAD, centuries_since_j2000};

/// Per-century drift of each element. Absent rates are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRates {
    /// AU per century
    pub a: f64,
    /// Per century
    pub e: f64,
    /// Degrees per century
    pub i: f64,
    /// Degrees per century
    pub mean_longitude: f64,
    /// Degrees per century
    pub long_peri: f64,
    /// Degrees per century
    pub long_node: f64,
}

/// Mean orbital elements at the J2000 reference epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in AU
    pub a: f64,
    /// Eccentricity (0 ≤ e < 1)
    pub e: f64,
    /// Inclination in degrees
    pub i: f64,
    /// Mean longitude in degrees
    pub mean_longitude: f64,
    /// Longitude of perihelion in degrees
    pub long_peri: f64,
    /// Longitude of the ascending node in degrees
    pub long_node: f64,
    /// Secular rates per Julian century
    pub rates: ElementRates,
}

impl OrbitalElements {
    /// Elements that never drift.
    pub fn without_rates(
        a: f64,
        e: f64,
        i: f64,
        mean_longitude: f64,
        long_peri: f64,
        long_node: f64,
    ) -> Self {
        Self {
            a,
            e,
            i,
            mean_longitude,
            long_peri,
            long_node,
            rates: ElementRates::default(),
        }
    }

    /// Instantaneous elements `T` Julian centuries after J2000.
    pub fn at_centuries(&self, t: f64) -> MeanElements {
        let r = &self.rates;
        MeanElements {
            a: self.a + r.a * t,
            e: self.e + r.e * t,
            i: self.i + r.i * t,
            mean_longitude: self.mean_longitude + r.mean_longitude * t,
            long_peri: self.long_peri + r.long_peri * t,
            long_node: self.long_node + r.long_node * t,
        }
    }

    /// Instantaneous elements at an epoch given in days since J2000.
    pub fn at_epoch(&self, days: f64) -> MeanElements {
        self.at_centuries(centuries_since_j2000(days))
    }
}

/// Elements evaluated at one instant. Same units as [`OrbitalElements`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeanElements {
    pub a: f64,
    pub e: f64,
    pub i: f64,
    pub mean_longitude: f64,
    pub long_peri: f64,
    pub long_node: f64,
}

impl MeanElements {
    /// Angles in radians, with the derived mean anomaly and argument of perihelion.
    pub fn angles(&self) -> OrbitAngles {
        let inclination = self.i * DEG_TO_RAD;
        let mean_longitude = self.mean_longitude * DEG_TO_RAD;
        let long_peri = self.long_peri * DEG_TO_RAD;
        let long_node = self.long_node * DEG_TO_RAD;

        OrbitAngles {
            mean_anomaly: mean_longitude - long_peri,
            argument_of_perihelion: long_peri - long_node,
            inclination,
            long_node,
        }
    }

    /// Closest approach to the Sun in AU.
    pub fn perihelion(&self) -> f64 {
        self.a * (1.0 - self.e)
    }

    /// Farthest distance from the Sun in AU.
    pub fn aphelion(&self) -> f64 {
        self.a * (1.0 + self.e)
    }
}

/// Angular part of the elements, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitAngles {
    /// M = L − ϖ
    pub mean_anomaly: f64,
    /// ω = ϖ − Ω
    pub argument_of_perihelion: f64,
    pub inclination: f64,
    /// Ω
    pub long_node: f64,
}
