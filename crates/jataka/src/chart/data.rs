use crate::ephemeris::{Body, GeoLocation};
use crate::vedic::{Nakshatra, Rasi};
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw birth data as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    /// `YYYY-MM-DD`
    pub dob: String,
    /// `HH:MM:SS`, local clock time
    pub tob: String,
    pub location: GeoLocation,
    /// One-letter code or name, e.g. `"P"` or `"placidus"`.
    pub house_system: String,
    /// `+HH:MM`; falls back to the calculator's configured offset.
    pub utc_offset: Option<String>,
}

impl ChartRequest {
    pub fn new(dob: impl Into<String>, tob: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            dob: dob.into(),
            tob: tob.into(),
            location: GeoLocation { lat, lon },
            house_system: "P".to_string(),
            utc_offset: None,
        }
    }

    pub fn with_house_system(mut self, house_system: impl Into<String>) -> Self {
        self.house_system = house_system.into();
        self
    }

    pub fn with_utc_offset(mut self, utc_offset: impl Into<String>) -> Self {
        self.utc_offset = Some(utc_offset.into());
        self
    }
}

/// Sidereal placements for one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Moon sign.
    pub rasi: Rasi,
    /// Moon nakshatra.
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub ascendant: f64,
    /// Longitude per body, in [0, 360).
    pub planets: BTreeMap<Body, f64>,
}

impl Chart {
    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.planets.get(&body).copied()
    }
}
