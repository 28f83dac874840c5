//! Orbital elements and reference data for the eight planets (J2000 epoch).
//! Source: NASA JPL "Keplerian Elements for Approximate Positions of the Major
//! Planets", rates per Julian century.

use std::fmt;
use std::str::FromStr;

use super::elements::{ElementRates, OrbitalElements};

/// Identifier for the bodies the engine propagates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CelestialBodyId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl CelestialBodyId {
    /// All planets, ordered outward from the Sun.
    pub const PLANETS: &'static [CelestialBodyId] = &[
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
        }
    }

    /// Stable lowercase identifier, e.g. `"earth"`.
    pub fn key(&self) -> &'static str {
        match self {
            CelestialBodyId::Mercury => "mercury",
            CelestialBodyId::Venus => "venus",
            CelestialBodyId::Earth => "earth",
            CelestialBodyId::Mars => "mars",
            CelestialBodyId::Jupiter => "jupiter",
            CelestialBodyId::Saturn => "saturn",
            CelestialBodyId::Uranus => "uranus",
            CelestialBodyId::Neptune => "neptune",
        }
    }

    /// Planet by 1-based order from the Sun (1 = Mercury).
    pub fn from_ordinal(n: usize) -> Option<CelestialBodyId> {
        n.checked_sub(1)
            .and_then(|i| Self::PLANETS.get(i))
            .copied()
    }
}

impl fmt::Display for CelestialBodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a body identifier does not name a modeled planet.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown celestial body: {0:?}")]
pub struct UnknownBodyError(pub String);

impl FromStr for CelestialBodyId {
    type Err = UnknownBodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::PLANETS
            .iter()
            .copied()
            .find(|id| id.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownBodyError(s.to_string()))
    }
}

/// Fixed visual metadata. The engine never reads it.
#[derive(Clone, Debug)]
pub struct BodyVisual {
    /// Base color as sRGB hex, e.g. `0x2271B3`.
    pub color: u32,
    /// Atmospheric glow color, for bodies that have one.
    pub atmosphere_color: Option<u32>,
    pub has_rings: bool,
}

/// Descriptive data for the info panel.
#[derive(Clone, Debug)]
pub struct BodyTrivia {
    pub description: &'static str,
    pub mass: &'static str,
    pub gravity: &'static str,
    pub temperature: &'static str,
    pub distance_from_sun: &'static str,
    /// Sidereal period in days (reference only, not used for propagation)
    pub orbital_period_days: f64,
}

/// Static data for a celestial body.
#[derive(Clone, Debug)]
pub struct CelestialBodyData {
    pub id: CelestialBodyId,
    pub elements: OrbitalElements,
    /// Sphere radius in render units (not physical)
    pub display_radius: f32,
    /// Spin rate multiplier relative to Earth
    pub rotation_speed: f32,
    pub visual: BodyVisual,
    pub trivia: BodyTrivia,
}

fn elements(
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    mean_longitude: (f64, f64),
    long_peri: (f64, f64),
    long_node: (f64, f64),
) -> OrbitalElements {
    OrbitalElements {
        a: a.0,
        e: e.0,
        i: i.0,
        mean_longitude: mean_longitude.0,
        long_peri: long_peri.0,
        long_node: long_node.0,
        rates: ElementRates {
            a: a.1,
            e: e.1,
            i: i.1,
            mean_longitude: mean_longitude.1,
            long_peri: long_peri.1,
            long_node: long_node.1,
        },
    }
}

/// Get orbital and reference data for a planet.
pub fn get_body_data(id: CelestialBodyId) -> CelestialBodyData {
    match id {
        CelestialBodyId::Mercury => CelestialBodyData {
            id,
            elements: elements(
                (0.38709893, 0.00000066),
                (0.20563069, 0.00002527),
                (7.00487, -0.00594749),
                (252.25084, 149472.6741),
                (77.45645, 0.15935),
                (48.33167, -0.12534),
            ),
            display_radius: 0.8,
            rotation_speed: 0.017,
            visual: BodyVisual {
                color: 0xA5A5A5,
                atmosphere_color: None,
                has_rings: false,
            },
            trivia: BodyTrivia {
                description: "The smallest and closest planet to the Sun.",
                mass: "3.285 × 10^23 kg",
                gravity: "3.7 m/s²",
                temperature: "167°C",
                distance_from_sun: "0.39 AU",
                orbital_period_days: 87.969,
            },
        },
        CelestialBodyId::Venus => CelestialBodyData {
            id,
            elements: elements(
                (0.72333199, 0.00000092),
                (0.00677323, -0.00004938),
                (3.39471, -0.0007889),
                (181.97973, 58517.8153),
                (131.53298, 0.00213),
                (76.68069, -0.27769),
            ),
            display_radius: 1.2,
            rotation_speed: 0.004,
            visual: BodyVisual {
                color: 0xE3BB76,
                atmosphere_color: Some(0xFFCC88),
                has_rings: false,
            },
            trivia: BodyTrivia {
                description: "Earth's twin in size with a thick, toxic atmosphere.",
                mass: "4.867 × 10^24 kg",
                gravity: "8.87 m/s²",
                temperature: "464°C",
                distance_from_sun: "0.72 AU",
                orbital_period_days: 224.7,
            },
        },
        CelestialBodyId::Earth => CelestialBodyData {
            id,
            elements: elements(
                (1.00000011, -0.00000005),
                (0.01671022, -0.00003804),
                (0.00005, -0.01300),
                (100.46435, 35999.3724),
                (102.94719, 0.32327),
                (-11.26064, -0.44523),
            ),
            display_radius: 1.3,
            rotation_speed: 1.0,
            visual: BodyVisual {
                color: 0x2271B3,
                atmosphere_color: Some(0x44AAFF),
                has_rings: false,
            },
            trivia: BodyTrivia {
                description: "Our home planet, the only known world with life.",
                mass: "5.972 × 10^24 kg",
                gravity: "9.81 m/s²",
                temperature: "15°C",
                distance_from_sun: "1.00 AU",
                orbital_period_days: 365.25,
            },
        },
        CelestialBodyId::Mars => CelestialBodyData {
            id,
            elements: elements(
                (1.52366231, -0.00007221),
                (0.09341233, 0.00011902),
                (1.85061, -0.00813),
                (355.45332, 19140.3026),
                (336.04084, 0.4411),
                (49.57854, -0.2941),
            ),
            display_radius: 1.0,
            rotation_speed: 0.97,
            visual: BodyVisual {
                color: 0xE27B58,
                atmosphere_color: Some(0xFF8866),
                has_rings: false,
            },
            trivia: BodyTrivia {
                description: "The Red Planet, home to the solar system's largest volcano.",
                mass: "6.39 × 10^23 kg",
                gravity: "3.72 m/s²",
                temperature: "-65°C",
                distance_from_sun: "1.52 AU",
                orbital_period_days: 686.98,
            },
        },
        CelestialBodyId::Jupiter => CelestialBodyData {
            id,
            elements: elements(
                (5.20336301, 0.00060737),
                (0.04839266, -0.0001288),
                (1.30530, -0.00415),
                (34.40438, 3034.7461),
                (14.75385, 0.16129),
                (100.55615, 0.20469),
            ),
            display_radius: 4.5,
            rotation_speed: 2.4,
            visual: BodyVisual {
                color: 0xD39C7E,
                atmosphere_color: None,
                has_rings: false,
            },
            trivia: BodyTrivia {
                description: "The king of the planets, a massive gas giant.",
                mass: "1.898 × 10^27 kg",
                gravity: "24.79 m/s²",
                temperature: "-110°C",
                distance_from_sun: "5.20 AU",
                orbital_period_days: 4332.6,
            },
        },
        CelestialBodyId::Saturn => CelestialBodyData {
            id,
            elements: elements(
                (9.53707032, -0.0030153),
                (0.05415060, -0.0003676),
                (2.48446, 0.00611),
                (49.94432, 1222.4944),
                (92.43194, -0.0392),
                (113.71504, -0.2591),
            ),
            display_radius: 4.0,
            rotation_speed: 2.2,
            visual: BodyVisual {
                color: 0xC5AB6E,
                atmosphere_color: None,
                has_rings: true,
            },
            trivia: BodyTrivia {
                description: "Famous for its complex and beautiful ring system.",
                mass: "5.683 × 10^26 kg",
                gravity: "10.44 m/s²",
                temperature: "-140°C",
                distance_from_sun: "9.54 AU",
                orbital_period_days: 10759.2,
            },
        },
        CelestialBodyId::Uranus => CelestialBodyData {
            id,
            elements: elements(
                (19.19126393, 0.0015202),
                (0.04716771, -0.0001915),
                (0.76986, 0.00026),
                (313.23218, 428.4820),
                (170.96424, 0.0779),
                (74.22988, -0.0975),
            ),
            display_radius: 2.5,
            rotation_speed: 1.4,
            visual: BodyVisual {
                color: 0xB5E3E3,
                atmosphere_color: None,
                has_rings: false,
            },
            trivia: BodyTrivia {
                description: "An ice giant that rotates on its side.",
                mass: "8.681 × 10^25 kg",
                gravity: "8.69 m/s²",
                temperature: "-195°C",
                distance_from_sun: "19.22 AU",
                orbital_period_days: 30685.4,
            },
        },
        CelestialBodyId::Neptune => CelestialBodyData {
            id,
            elements: elements(
                (30.06896348, -0.0012519),
                (0.00858587, 0.0000251),
                (1.76917, -0.00035),
                (304.88003, 218.4594),
                (44.97135, -0.3224),
                (131.72169, -0.0025),
            ),
            display_radius: 2.4,
            rotation_speed: 1.5,
            visual: BodyVisual {
                color: 0x4B70DD,
                atmosphere_color: Some(0x6688FF),
                has_rings: false,
            },
            trivia: BodyTrivia {
                description: "A blue ice giant with the fastest winds in the solar system.",
                mass: "1.024 × 10^26 kg",
                gravity: "11.15 m/s²",
                temperature: "-201°C",
                distance_from_sun: "30.1 AU",
                orbital_period_days: 60190.0,
            },
        },
    }
}

/// Data for every modeled planet, ordered outward from the Sun.
pub fn all_bodies() -> Vec<CelestialBodyData> {
    CelestialBodyId::PLANETS
        .iter()
        .map(|&id| get_body_data(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_planets_present_in_order() {
        let bodies = all_bodies();
        assert_eq!(bodies.len(), 8);
        for (body, &id) in bodies.iter().zip(CelestialBodyId::PLANETS) {
            assert_eq!(body.id, id);
        }
    }

    #[test]
    fn test_semi_major_axes_increase_outward() {
        let bodies = all_bodies();
        for pair in bodies.windows(2) {
            assert!(pair[0].elements.a < pair[1].elements.a);
        }
    }

    #[test]
    fn test_eccentricities_are_elliptical() {
        for body in all_bodies() {
            assert!((0.0..0.21).contains(&body.elements.e), "{}", body.id);
        }
    }

    #[test]
    fn test_parse_body_id() {
        assert_eq!("earth".parse::<CelestialBodyId>(), Ok(CelestialBodyId::Earth));
        assert_eq!(" Saturn ".parse::<CelestialBodyId>(), Ok(CelestialBodyId::Saturn));
        assert_eq!(
            "pluto".parse::<CelestialBodyId>(),
            Err(UnknownBodyError("pluto".to_string()))
        );
    }

    #[test]
    fn test_ordinal_lookup() {
        assert_eq!(CelestialBodyId::from_ordinal(1), Some(CelestialBodyId::Mercury));
        assert_eq!(CelestialBodyId::from_ordinal(8), Some(CelestialBodyId::Neptune));
        assert_eq!(CelestialBodyId::from_ordinal(0), None);
        assert_eq!(CelestialBodyId::from_ordinal(9), None);
    }
}
