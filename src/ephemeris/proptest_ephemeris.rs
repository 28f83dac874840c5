//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that propagation keeps its geometric guarantees across
//! a wide range of epochs and element sets.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::{KeplerSolver, heliocentric_position, orbital_plane_position};
use super::{CelestialBodyId, Ephemeris, OrbitalElements};
use crate::scaling::{ScaleMode, ScaleSettings, to_display};
use crate::test_utils::assertions;

fn any_planet() -> impl Strategy<Value = CelestialBodyId> {
    (0usize..8).prop_map(|i| CelestialBodyId::PLANETS[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every propagated position lies between perihelion and aphelion of the
    /// instantaneous ellipse, whatever the solver's residual. The range spans
    /// roughly 55 centuries either side of J2000.
    #[test]
    fn prop_radius_within_apsides(
        id in any_planet(),
        epoch in -2_000_000.0f64..2_000_000.0,
    ) {
        let eph = Ephemeris::new();
        let el = eph.elements_at(id, epoch).unwrap();
        let pos = eph.position(id, epoch).unwrap();
        prop_assert!(
            assertions::within_apsides(pos, &el),
            "{} at epoch {}: r={} outside [{}, {}]",
            id, epoch, pos.length(), el.perihelion(), el.aphelion()
        );
    }

    /// Arbitrary elliptical element sets obey the same bound.
    #[test]
    fn prop_arbitrary_orbit_within_apsides(
        a in 0.1f64..50.0,
        e in 0.0f64..0.95,
        i in 0.0f64..180.0,
        mean_longitude in -720.0f64..720.0,
        long_peri in 0.0f64..360.0,
        long_node in 0.0f64..360.0,
    ) {
        let el = OrbitalElements::without_rates(a, e, i, mean_longitude, long_peri, long_node)
            .at_centuries(0.0);
        let pos = heliocentric_position(&el, KeplerSolver::default());
        prop_assert!(assertions::within_apsides(pos, &el));
    }

    /// Newton satisfies Kepler's equation for any elliptical eccentricity.
    #[test]
    fn prop_newton_solves_kepler(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let m = mean_anomaly_normalized * TAU;
        let e_anom = KeplerSolver::NEWTON.solve(m, eccentricity);
        let m_check = e_anom - eccentricity * e_anom.sin();
        prop_assert!((m_check - m.rem_euclid(TAU)).abs() < 1e-8);
    }

    /// Fixed-point and Newton place a planet-like orbit at the same point.
    #[test]
    fn prop_solvers_agree_for_low_eccentricity(
        m in 0.0f64..TAU,
        e in 0.0f64..0.21,
    ) {
        let fixed = KeplerSolver::default().solve(m, e);
        let newton = KeplerSolver::NEWTON.solve(m, e);
        let pa = orbital_plane_position(1.0, e, fixed);
        let pb = orbital_plane_position(1.0, e, newton);
        prop_assert!((pa - pb).length() < 1e-4);
    }

    /// Display mapping keeps radial order in both modes.
    #[test]
    fn prop_display_preserves_radial_order(
        r1 in 0.01f64..60.0,
        r2 in 0.01f64..60.0,
        lon in 0.0f64..TAU,
    ) {
        prop_assume!(r1 != r2);
        let scale = ScaleSettings::default();
        let dir = bevy::math::DVec3::new(lon.cos(), lon.sin(), 0.0);
        for mode in [ScaleMode::Real, ScaleMode::Visual] {
            let d1 = to_display(dir * r1, mode, &scale);
            let d2 = to_display(dir * r2, mode, &scale);
            prop_assert_eq!(r1 < r2, d1.length() < d2.length());
            prop_assert!(assertions::same_direction(d1, dir, 1e-6));
        }
    }
}
