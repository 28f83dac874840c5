//! Test utilities for propagation tests.
//!
//! Provides element fixtures and assertions for the geometric invariants every
//! propagated position must satisfy.

use bevy::math::DVec3;

use crate::ephemeris::{MeanElements, OrbitalElements};

/// Fixtures for creating test element sets.
pub mod fixtures {
    use super::*;

    /// Earth's J2000 elements without secular drift.
    pub fn earth_like() -> MeanElements {
        OrbitalElements::without_rates(1.0, 0.0167, 0.00005, 100.46, 102.95, -11.26)
            .at_centuries(0.0)
    }

    /// Mars' J2000 elements without secular drift.
    pub fn mars_like() -> MeanElements {
        OrbitalElements::without_rates(1.5237, 0.0934, 1.85, 355.45, 336.04, 49.58)
            .at_centuries(0.0)
    }

    /// Circular, uninclined orbit of radius `a` with the body at longitude `lon_deg`.
    pub fn circular(a: f64, lon_deg: f64) -> MeanElements {
        OrbitalElements::without_rates(a, 0.0, 0.0, lon_deg, 0.0, 0.0).at_centuries(0.0)
    }
}

/// Assertions for verifying propagation invariants.
pub mod assertions {
    use super::*;

    /// Relative slack applied to apsis bounds.
    pub const APSIS_TOLERANCE: f64 = 1e-9;

    /// True when `|position|` lies within the perihelion/aphelion of `elements`.
    pub fn within_apsides(position: DVec3, elements: &MeanElements) -> bool {
        let r = position.length();
        r >= elements.perihelion() * (1.0 - APSIS_TOLERANCE)
            && r <= elements.aphelion() * (1.0 + APSIS_TOLERANCE)
    }

    /// True when two non-zero vectors point the same way within `tolerance` radians.
    pub fn same_direction(a: DVec3, b: DVec3, tolerance: f64) -> bool {
        a.angle_between(b) <= tolerance
    }
}

/// Bevy test helpers.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::kepler::{KeplerSolver, heliocentric_position};
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_fixture_position() {
        let pos = heliocentric_position(&fixtures::circular(2.0, 90.0), KeplerSolver::default());
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_within_apsides_rejects_outside() {
        let el = fixtures::mars_like();
        assert!(assertions::within_apsides(DVec3::X * el.a, &el));
        assert!(!assertions::within_apsides(DVec3::X * el.aphelion() * 1.01, &el));
        assert!(!assertions::within_apsides(DVec3::ZERO, &el));
    }

    #[test]
    fn test_same_direction() {
        assert!(assertions::same_direction(DVec3::X, DVec3::X * 5.0, 1e-6));
        assert!(!assertions::same_direction(DVec3::X, DVec3::Y, 0.1));
    }

    #[test]
    fn test_headless_app_hosts_ephemeris() {
        let mut app = bevy_test::headless_app();
        app.init_resource::<crate::ephemeris::Ephemeris>();
        app.update();
        assert_eq!(
            app.world()
                .resource::<crate::ephemeris::Ephemeris>()
                .bodies()
                .len(),
            8
        );
    }
}
