//! Ephemeris module for computing planet positions from mean elements.
//!
//! Coordinate frame:
//! - 3D heliocentric (Sun at origin), J2000 ecliptic, AU.
//! - Epochs are days since J2000 (2000-01-01 00:00 UTC).

pub mod data;
pub mod elements;
pub mod kepler;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{
    BodyTrivia, BodyVisual, CelestialBodyData, CelestialBodyId, UnknownBodyError, all_bodies,
    get_body_data,
};
pub use elements::{ElementRates, MeanElements, OrbitAngles, OrbitalElements};
pub use kepler::{KeplerSolver, heliocentric_position};

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::scaling::{ScaleMode, ScaleSettings, to_display};

/// Where one body is at one epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropagatedState {
    pub id: CelestialBodyId,
    /// Heliocentric ecliptic position in AU
    pub heliocentric: DVec3,
    /// Display position in render units, still in ecliptic axes
    pub display: DVec3,
    /// Distance from the Sun in AU
    pub radius: f64,
}

/// Resource providing positions for every modeled planet.
#[derive(Resource, Clone, Debug)]
pub struct Ephemeris {
    bodies: Vec<CelestialBodyData>,
    solver: KeplerSolver,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris {
    /// All eight planets with the default fixed-point solver.
    pub fn new() -> Self {
        Self::with_solver(KeplerSolver::default())
    }

    pub fn with_solver(solver: KeplerSolver) -> Self {
        Self {
            bodies: all_bodies(),
            solver,
        }
    }

    pub fn solver(&self) -> KeplerSolver {
        self.solver
    }

    /// Bodies ordered outward from the Sun.
    pub fn bodies(&self) -> &[CelestialBodyData] {
        &self.bodies
    }

    pub fn body(&self, id: CelestialBodyId) -> Option<&CelestialBodyData> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Instantaneous elements of a body at an epoch (days since J2000).
    pub fn elements_at(&self, id: CelestialBodyId, epoch_days: f64) -> Option<MeanElements> {
        self.body(id).map(|b| b.elements.at_epoch(epoch_days))
    }

    /// Heliocentric ecliptic position in AU.
    pub fn position(&self, id: CelestialBodyId, epoch_days: f64) -> Option<DVec3> {
        self.elements_at(id, epoch_days)
            .map(|el| heliocentric_position(&el, self.solver))
    }

    /// Full state of one body, including its display position under `mode`.
    pub fn state(
        &self,
        id: CelestialBodyId,
        epoch_days: f64,
        mode: ScaleMode,
        scale: &ScaleSettings,
    ) -> Option<PropagatedState> {
        self.body(id)
            .map(|b| self.propagate(b, epoch_days, mode, scale))
    }

    /// States of every body, all evaluated at the same epoch.
    pub fn states(
        &self,
        epoch_days: f64,
        mode: ScaleMode,
        scale: &ScaleSettings,
    ) -> Vec<PropagatedState> {
        self.bodies
            .iter()
            .map(|b| self.propagate(b, epoch_days, mode, scale))
            .collect()
    }

    fn propagate(
        &self,
        body: &CelestialBodyData,
        epoch_days: f64,
        mode: ScaleMode,
        scale: &ScaleSettings,
    ) -> PropagatedState {
        let elements = body.elements.at_epoch(epoch_days);
        let heliocentric = heliocentric_position(&elements, self.solver);
        PropagatedState {
            id: body.id,
            heliocentric,
            display: to_display(heliocentric, mode, scale),
            radius: heliocentric.length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DAYS_PER_YEAR;
    use approx::assert_relative_eq;

    #[test]
    fn test_ephemeris_creation() {
        let eph = Ephemeris::new();
        assert_eq!(eph.bodies().len(), 8);
        assert!(eph.body(CelestialBodyId::Earth).is_some());
        assert_eq!(eph.solver(), KeplerSolver::default());
    }

    #[test]
    fn test_earth_position_at_epoch() {
        let eph = Ephemeris::new();
        let earth = eph.position(CelestialBodyId::Earth, 0.0).unwrap();
        let r = earth.length();
        assert!((0.983..=1.017).contains(&r), "Earth at {r} AU");
    }

    #[test]
    fn test_planetary_motion_over_time() {
        let eph = Ephemeris::new();
        let p0 = eph.position(CelestialBodyId::Earth, 0.0).unwrap();
        let p_half = eph
            .position(CelestialBodyId::Earth, DAYS_PER_YEAR / 2.0)
            .unwrap();

        let dot = p0.normalize().dot(p_half.normalize());
        assert!(
            dot < -0.95,
            "Earth after 6 months should be on the opposite side, dot product = {}",
            dot
        );
    }

    #[test]
    fn test_states_share_one_epoch() {
        let eph = Ephemeris::new();
        let scale = ScaleSettings::default();
        let epoch = 8766.0;
        let states = eph.states(epoch, ScaleMode::Visual, &scale);
        assert_eq!(states.len(), 8);
        for s in &states {
            let single = eph.state(s.id, epoch, ScaleMode::Visual, &scale).unwrap();
            assert_eq!(*s, single);
            assert_relative_eq!(s.radius, s.heliocentric.length());
        }
    }

    #[test]
    fn test_display_order_matches_orbit_order() {
        // Orbits don't cross, so the display order follows the semi-major axes.
        let eph = Ephemeris::new();
        let scale = ScaleSettings::default();
        for mode in [ScaleMode::Real, ScaleMode::Visual] {
            let states = eph.states(3000.0, mode, &scale);
            for pair in states.windows(2) {
                assert!(pair[0].display.length() < pair[1].display.length());
            }
        }
    }

    #[test]
    fn test_state_display_matches_mapper() {
        let eph = Ephemeris::new();
        let scale = ScaleSettings::default();
        let s = eph
            .state(CelestialBodyId::Jupiter, -1234.5, ScaleMode::Real, &scale)
            .unwrap();
        assert_eq!(s.display, to_display(s.heliocentric, ScaleMode::Real, &scale));
    }

    #[test]
    fn test_newton_ephemeris_close_to_default() {
        let fixed = Ephemeris::new();
        let newton = Ephemeris::with_solver(KeplerSolver::NEWTON);
        for &id in CelestialBodyId::PLANETS {
            let a = fixed.position(id, 4000.0).unwrap();
            let b = newton.position(id, 4000.0).unwrap();
            assert!((a - b).length() < 1e-3, "{id}: {}", (a - b).length());
        }
    }
}
