use crate::ayanamsa::Ayanamsa;
use crate::chart::data::{Chart, ChartRequest};
use crate::ephemeris::{Body, Ephemeris, EphemerisError, HouseSystem, InvalidHouseSystem, Zodiac};
use crate::time::{self, TimeError, UtcOffset};
use crate::vedic::{nakshatra_for_longitude, normalize_degrees, Rasi};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    InvalidHouseSystem(#[from] InvalidHouseSystem),
    #[error("Longitude of {what} is not a finite number")]
    NonFiniteLongitude { what: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

impl ChartError {
    /// Whether the caller's input, rather than the computation, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChartError::Time(_) | ChartError::InvalidHouseSystem(_))
    }
}

/// Computes sidereal birth charts on top of an [`Ephemeris`].
pub struct ChartCalculator<E: Ephemeris + ?Sized> {
    ephemeris: Arc<E>,
    ayanamsa: Ayanamsa,
    utc_offset: UtcOffset,
}

impl<E: Ephemeris + ?Sized> ChartCalculator<E> {
    /// Lahiri ayanamsa, +05:30 offset.
    pub fn new(ephemeris: Arc<E>) -> Self {
        Self {
            ephemeris,
            ayanamsa: Ayanamsa::default(),
            utc_offset: UtcOffset::default(),
        }
    }

    pub fn with_ayanamsa(mut self, ayanamsa: Ayanamsa) -> Self {
        self.ayanamsa = ayanamsa;
        self
    }

    pub fn with_utc_offset(mut self, utc_offset: UtcOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        self.ayanamsa
    }

    pub fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    /// Julian Day (UT) of a local birth date/time.
    pub fn julian_day(
        &self,
        dob: &str,
        tob: &str,
        utc_offset: Option<UtcOffset>,
    ) -> Result<f64, ChartError> {
        let local = time::parse_birth_datetime(dob, tob)?;
        let utc = utc_offset.unwrap_or(self.utc_offset).to_utc(local)?;
        Ok(self.ephemeris.julian_day(&utc))
    }

    pub fn compute(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        let utc_offset = request
            .utc_offset
            .as_deref()
            .map(str::parse::<UtcOffset>)
            .transpose()?;
        let house_system: HouseSystem = request.house_system.parse()?;
        let jd = self.julian_day(&request.dob, &request.tob, utc_offset)?;
        let zodiac = Zodiac::Sidereal(self.ayanamsa);

        let mut planets = BTreeMap::new();
        for body in Body::ALL {
            let lon = self.ephemeris.body_longitude(jd, body, zodiac)?;
            planets.insert(body, finite_longitude(lon, body.name())?);
        }

        let moon = planets[&Body::Moon];
        let rasi = Rasi::from_longitude(moon).ok_or_else(|| non_finite("Moon"))?;
        let placement = nakshatra_for_longitude(moon).ok_or_else(|| non_finite("Moon"))?;

        let ascendant = self
            .ephemeris
            .ascendant(jd, request.location, house_system, zodiac)?;
        let ascendant = finite_longitude(ascendant, "ascendant")?;

        log::debug!(
            "Chart at JD {:.6}: moon {:.4} -> {} / {} pada {}",
            jd,
            moon,
            rasi,
            placement.nakshatra,
            placement.pada
        );

        Ok(Chart {
            rasi,
            nakshatra: placement.nakshatra,
            pada: placement.pada,
            ascendant,
            planets,
        })
    }
}

fn non_finite(what: &str) -> ChartError {
    ChartError::NonFiniteLongitude {
        what: what.to_string(),
    }
}

fn finite_longitude(lon: f64, what: &str) -> Result<f64, ChartError> {
    normalize_degrees(lon).ok_or_else(|| non_finite(what))
}
