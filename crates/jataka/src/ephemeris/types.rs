use crate::ayanamsa::Ayanamsa;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Bodies tracked in a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean lunar node.
    Rahu,
}

impl Body {
    pub const ALL: [Body; 8] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Rahu,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
        }
    }

    /// Swiss Ephemeris body number (SE_SUN .. SE_SATURN, SE_MEAN_NODE).
    pub const fn swiss_code(self) -> i32 {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Rahu => 10,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zodiac frame for a single query. Sidereal carries its ayanamsa so no
/// query ever depends on previously configured adapter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zodiac {
    Tropical,
    Sidereal(Ayanamsa),
}

/// House system mapping: (code, name)
const HOUSE_SYSTEMS: &[(HouseSystem, char, &str)] = &[
    (HouseSystem::Placidus, 'P', "placidus"),
    (HouseSystem::Koch, 'K', "koch"),
    (HouseSystem::Porphyry, 'O', "porphyry"),
    (HouseSystem::Regiomontanus, 'R', "regiomontanus"),
    (HouseSystem::Campanus, 'C', "campanus"),
    (HouseSystem::Equal, 'E', "equal"),
    (HouseSystem::Alcabitius, 'B', "alcabitius"),
    (HouseSystem::WholeSign, 'W', "whole_sign"),
    (HouseSystem::Morinus, 'M', "morinus"),
    (HouseSystem::Meridian, 'X', "meridian"),
    (HouseSystem::Horizontal, 'H', "horizontal"),
    (HouseSystem::Topocentric, 'T', "topocentric"),
    (HouseSystem::Vehlow, 'V', "vehlow"),
    (HouseSystem::Sripati, 'S', "sripati"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Porphyry,
    Regiomontanus,
    Campanus,
    Equal,
    Alcabitius,
    WholeSign,
    Morinus,
    Meridian,
    Horizontal,
    Topocentric,
    Vehlow,
    Sripati,
}

impl HouseSystem {
    /// Single-letter Swiss Ephemeris code.
    pub fn code(self) -> char {
        HOUSE_SYSTEMS
            .iter()
            .find(|(system, _, _)| *system == self)
            .map(|(_, code, _)| *code)
            .unwrap_or('P')
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(system, _, _)| *system == self)
            .map(|(_, _, name)| *name)
            .unwrap_or("placidus")
    }

    /// Every accepted spelling, codes first.
    pub fn valid_values() -> Vec<String> {
        HOUSE_SYSTEMS
            .iter()
            .map(|(_, code, _)| code.to_string())
            .chain(HOUSE_SYSTEMS.iter().map(|(_, _, name)| name.to_string()))
            .chain(std::iter::once("A".to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid house system: {system}. Valid systems: {valid:?}")]
pub struct InvalidHouseSystem {
    pub system: String,
    pub valid: Vec<String>,
}

impl FromStr for HouseSystem {
    type Err = InvalidHouseSystem;

    /// Accepts a one-letter code (`"P"`) or a name (`"placidus"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let found = match (chars.next(), chars.next()) {
            // 'A' is the Swiss alias for equal houses.
            (Some(c), None) if c.eq_ignore_ascii_case(&'A') => Some(HouseSystem::Equal),
            (Some(c), None) => HOUSE_SYSTEMS
                .iter()
                .find(|(_, code, _)| code.eq_ignore_ascii_case(&c))
                .map(|(system, _, _)| *system),
            _ => {
                let lower = trimmed.to_lowercase();
                HOUSE_SYSTEMS
                    .iter()
                    .find(|(_, _, name)| *name == lower)
                    .map(|(system, _, _)| *system)
            }
        };
        found.ok_or_else(|| InvalidHouseSystem {
            system: s.to_string(),
            valid: HouseSystem::valid_values(),
        })
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which Swiss Ephemeris backend computes positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EphemerisSource {
    /// Compressed JPL-derived data files (`FLG_SWIEPH`).
    #[default]
    Swiss,
    /// Built-in analytic Moshier theory, needs no files (`FLG_MOSEPH`).
    Moshier,
}

impl EphemerisSource {
    pub const fn flag(self) -> i32 {
        match self {
            EphemerisSource::Swiss => 2,
            EphemerisSource::Moshier => 4,
        }
    }
}

impl FromStr for EphemerisSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "swiss" | "swieph" => Ok(EphemerisSource::Swiss),
            "moshier" | "moseph" => Ok(EphemerisSource::Moshier),
            other => Err(format!(
                "Invalid ephemeris source: {other}. Valid sources: [\"swiss\", \"moshier\"]"
            )),
        }
    }
}
