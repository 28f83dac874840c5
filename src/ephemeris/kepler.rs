//! Kepler equation solvers and the element-to-position propagator.
//!
//! Positions are heliocentric, J2000 ecliptic frame, in AU.

use bevy::math::{DVec2, DVec3};

use super::elements::MeanElements;

/// Iteration count used for body positions.
pub const POSITION_ITERATIONS: u32 = 6;

/// Strategy for solving Kepler's equation `E = M + e·sin(E)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeplerSolver {
    /// Fixed-point iteration seeded at `E₀ = M`, run a fixed number of times.
    ///
    /// There is no convergence check. The residual after `n` iterations is
    /// bounded by roughly `eⁿ⁺¹`, which is visually exact for the planets
    /// (e < 0.21) at 4-6 iterations but degrades quickly as e approaches 1.
    /// That ceiling is accepted in exchange for a fixed, predictable cost.
    FixedPoint { iterations: u32 },
    /// Newton-Raphson with an iteration cap. Same contract, tighter residual.
    Newton { max_iterations: u32, tolerance: f64 },
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver::FixedPoint {
            iterations: POSITION_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    /// Newton solver with the limits the simulator has always used.
    pub const NEWTON: KeplerSolver = KeplerSolver::Newton {
        max_iterations: 50,
        tolerance: 1e-12,
    };

    /// Solve for the eccentric anomaly (radians) given mean anomaly `m` (radians).
    ///
    /// Always returns a value; never fails.
    pub fn solve(&self, m: f64, e: f64) -> f64 {
        match *self {
            KeplerSolver::FixedPoint { iterations } => solve_fixed_point(m, e, m, iterations),
            KeplerSolver::Newton {
                max_iterations,
                tolerance,
            } => solve_newton(m, e, max_iterations, tolerance),
        }
    }
}

/// Fixed-point iteration `E ← m + e·sin(E)` starting from `seed`.
pub fn solve_fixed_point(m: f64, e: f64, seed: f64, iterations: u32) -> f64 {
    let mut e_anomaly = seed;
    for _ in 0..iterations {
        e_anomaly = m + e * e_anomaly.sin();
    }
    e_anomaly
}

/// Newton's method on `f(E) = E − e·sin(E) − M`.
///
/// The mean anomaly is first wrapped into `[0, 2π)`, so the result lies in
/// the same turn as the wrapped value rather than the caller's `m`.
pub fn solve_newton(m: f64, e: f64, max_iterations: u32, tolerance: f64) -> f64 {
    let m = m.rem_euclid(std::f64::consts::TAU);

    // Initial guess: E = M for low eccentricity, π for high e
    let mut e_anomaly = if e < 0.8 { m } else { std::f64::consts::PI };

    for _ in 0..max_iterations {
        let f = e_anomaly - e * e_anomaly.sin() - m;
        let f_prime = 1.0 - e * e_anomaly.cos();

        let delta = f / f_prime;
        e_anomaly -= delta;

        if delta.abs() < tolerance {
            break;
        }
    }

    e_anomaly
}

/// Position in the orbital plane (perihelion on +x) for a given eccentric anomaly.
///
/// `1 − e²` is clamped at zero: rate-extrapolated eccentricity can exceed 1
/// at extreme epochs and must not produce NaN.
pub fn orbital_plane_position(a: f64, e: f64, eccentric_anomaly: f64) -> DVec2 {
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    DVec2::new(
        a * (cos_e - e),
        a * (1.0 - e * e).max(0.0).sqrt() * sin_e,
    )
}

/// Rotate an orbital-plane vector into the ecliptic frame.
///
/// Closed form of `Rz(Ω) · Rx(i) · Rz(ω)` applied to `(x_p, y_p, 0)`.
pub fn rotate_to_ecliptic(
    plane: DVec2,
    argument_of_perihelion: f64,
    inclination: f64,
    long_node: f64,
) -> DVec3 {
    let (sw, cw) = argument_of_perihelion.sin_cos();
    let (si, ci) = inclination.sin_cos();
    let (sn, cn) = long_node.sin_cos();
    let (xp, yp) = (plane.x, plane.y);

    DVec3::new(
        (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp,
        (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    )
}

/// Heliocentric ecliptic position (AU) of a body with the given instantaneous elements.
pub fn heliocentric_position(elements: &MeanElements, solver: KeplerSolver) -> DVec3 {
    let angles = elements.angles();
    let e_anomaly = solver.solve(angles.mean_anomaly, elements.e);
    let plane = orbital_plane_position(elements.a, elements.e, e_anomaly);
    rotate_to_ecliptic(
        plane,
        angles.argument_of_perihelion,
        angles.inclination,
        angles.long_node,
    )
}
