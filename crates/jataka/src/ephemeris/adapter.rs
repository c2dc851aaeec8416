use crate::ephemeris::types::{Body, EphemerisSource, GeoLocation, HouseSystem, Zodiac};
use crate::time;
use crate::vedic::normalize_degrees;
use chrono::{DateTime, Datelike, Utc};
use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};
use thiserror::Error;

/// Default location of the Swiss Ephemeris data files.
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// GREG_CAL
const GREGORIAN: u32 = 1;

/// SEFLG_NONUT: positions against the mean equinox of date.
const FLG_NONUT: u32 = 64;

// The C library keeps its ephemeris path and caches in process-global state.
static SWISS_LOCK: Mutex<()> = Mutex::new(());

fn swiss_lock() -> MutexGuard<'static, ()> {
    SWISS_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {jd}: {message}")]
    CalculationFailed { body: String, jd: f64, message: String },
    #[error("House calculation failed at JD {jd}: {message}")]
    HouseCalculationFailed { jd: f64, message: String },
    #[error("Ephemeris returned a non-finite value for {what} at JD {jd}")]
    NonFiniteResult { what: String, jd: f64 },
}

/// Positional queries a chart needs from an ephemeris.
///
/// The zodiac frame is passed with every query; implementations must not
/// depend on sidereal configuration left behind by an earlier call.
pub trait Ephemeris: Send + Sync {
    /// Julian Day (UT) for a UTC instant on the Gregorian calendar.
    fn julian_day(&self, utc: &DateTime<Utc>) -> f64 {
        time::julian_day(utc)
    }

    /// Ecliptic longitude of `body` in degrees, normalized to [0, 360).
    fn body_longitude(&self, jd: f64, body: Body, zodiac: Zodiac) -> Result<f64, EphemerisError>;

    /// Ascendant longitude in degrees, normalized to [0, 360).
    fn ascendant(
        &self,
        jd: f64,
        location: GeoLocation,
        house_system: HouseSystem,
        zodiac: Zodiac,
    ) -> Result<f64, EphemerisError>;
}

/// Equinox a tropical longitude is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equinox {
    Mean,
    True,
}

/// Swiss Ephemeris adapter implementation.
///
/// Sidereal body positions are taken against the mean equinox of date and
/// reduced by the mean ayanamsa. The ascendant comes from the true equinox,
/// so it is reduced by the ayanamsa plus nutation in longitude.
pub struct SwissEphemerisAdapter {
    source: EphemerisSource,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// With [`EphemerisSource::Swiss`] the path falls back to
    /// `SWISS_EPHEMERIS_PATH`, then [`DEFAULT_EPHEMERIS_PATH`], and must exist.
    pub fn new(
        ephemeris_path: Option<PathBuf>,
        source: EphemerisSource,
    ) -> Result<Self, EphemerisError> {
        if source == EphemerisSource::Moshier {
            log::info!("Swiss Ephemeris using built-in Moshier theory");
            return Ok(Self::moshier());
        }

        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }
        let path_text = path
            .to_str()
            .filter(|text| !text.contains('\0'))
            .ok_or_else(|| EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path is not valid UTF-8.".to_string(),
            })?;

        {
            let _guard = swiss_lock();
            set_ephe_path(path_text);
        }
        log::info!("Swiss Ephemeris data path: {}", path.display());

        Ok(Self { source })
    }

    /// Adapter on the analytic Moshier theory; needs no data files.
    pub fn moshier() -> Self {
        Self {
            source: EphemerisSource::Moshier,
        }
    }

    pub fn source(&self) -> EphemerisSource {
        self.source
    }

    fn tropical_longitude(
        &self,
        jd: f64,
        body: Body,
        equinox: Equinox,
    ) -> Result<f64, EphemerisError> {
        let mut flags = self.source.flag() as u32;
        if equinox == Equinox::Mean {
            flags |= FLG_NONUT;
        }
        let _guard = swiss_lock();
        let result = calc_ut(jd, body.swiss_code() as u32, flags).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;
        Ok(result.out[0])
    }

    fn tropical_ascendant(
        &self,
        jd: f64,
        location: GeoLocation,
        house_system: HouseSystem,
    ) -> f64 {
        use swisseph::AscMc;
        let _guard = swiss_lock();
        let (_cusps, ascmc) = houses_ex(jd, 0, location.lat, location.lon, house_system.code() as i32);
        AscMc::from_array(ascmc).ascendant
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn julian_day(&self, utc: &DateTime<Utc>) -> f64 {
        julday(
            utc.year(),
            utc.month() as i32,
            utc.day() as i32,
            time::decimal_hours(utc),
            GREGORIAN,
        )
    }

    fn body_longitude(&self, jd: f64, body: Body, zodiac: Zodiac) -> Result<f64, EphemerisError> {
        let equinox = match zodiac {
            Zodiac::Tropical => Equinox::True,
            Zodiac::Sidereal(_) => Equinox::Mean,
        };
        let tropical = self.tropical_longitude(jd, body, equinox)?;
        let lon = apply_zodiac(tropical, jd, zodiac, equinox).ok_or_else(|| {
            EphemerisError::NonFiniteResult {
                what: body.name().to_string(),
                jd,
            }
        })?;
        log::debug!("{} at JD {:.6}: {:.6}", body, jd, lon);
        Ok(lon)
    }

    fn ascendant(
        &self,
        jd: f64,
        location: GeoLocation,
        house_system: HouseSystem,
        zodiac: Zodiac,
    ) -> Result<f64, EphemerisError> {
        if !location.lat.is_finite() || !location.lon.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                jd,
                message: format!("invalid location {:?}", location),
            });
        }
        let tropical = self.tropical_ascendant(jd, location, house_system);
        let asc = apply_zodiac(tropical, jd, zodiac, Equinox::True).ok_or_else(|| {
            EphemerisError::NonFiniteResult {
                what: format!("ascendant ({})", house_system.name()),
                jd,
            }
        })?;
        log::debug!("Ascendant ({}) at JD {:.6}: {:.6}", house_system.name(), jd, asc);
        Ok(asc)
    }
}

/// Shift a tropical longitude into the requested frame; `None` if non-finite.
pub fn apply_zodiac(tropical: f64, jd: f64, zodiac: Zodiac, equinox: Equinox) -> Option<f64> {
    let lon = match (zodiac, equinox) {
        (Zodiac::Tropical, _) => tropical,
        (Zodiac::Sidereal(ayanamsa), Equinox::Mean) => tropical - ayanamsa.value_deg(jd),
        (Zodiac::Sidereal(ayanamsa), Equinox::True) => tropical - ayanamsa.true_value_deg(jd),
    };
    normalize_degrees(lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ayanamsa::{Ayanamsa, J2000_JD};

    #[test]
    fn test_apply_zodiac_wraps_below_zero() {
        let lahiri = Zodiac::Sidereal(Ayanamsa::Lahiri);
        let lon = apply_zodiac(10.0, J2000_JD, lahiri, Equinox::Mean).unwrap();
        assert!((lon - (360.0 + 10.0 - 23.857_092)).abs() < 1e-9);
        assert_eq!(apply_zodiac(370.0, J2000_JD, Zodiac::Tropical, Equinox::True), Some(10.0));
        assert_eq!(apply_zodiac(f64::NAN, J2000_JD, Zodiac::Tropical, Equinox::Mean), None);
    }

    #[test]
    fn test_true_equinox_also_removes_nutation() {
        // 1990-01-01 05:00 UT, Δψ ≈ +11.83"
        let jd = 2_447_892.708_333;
        let lahiri = Zodiac::Sidereal(Ayanamsa::Lahiri);
        let mean = apply_zodiac(100.0, jd, lahiri, Equinox::Mean).unwrap();
        let true_eq = apply_zodiac(100.0, jd, lahiri, Equinox::True).unwrap();
        assert!(((mean - true_eq) * 3600.0 - 11.83).abs() < 0.05);
    }

    #[test]
    fn test_missing_path_is_reported() {
        let result = SwissEphemerisAdapter::new(
            Some(PathBuf::from("/definitely/not/a/swisseph/dir")),
            EphemerisSource::Swiss,
        );
        assert!(matches!(result, Err(EphemerisError::FileNotFound { .. })));
    }

    #[test]
    fn test_existing_path_is_handed_to_library() {
        let dir = env::temp_dir();
        let adapter = SwissEphemerisAdapter::new(Some(dir), EphemerisSource::Swiss).unwrap();
        assert_eq!(adapter.source(), EphemerisSource::Swiss);
        // The library keeps answering Moshier queries after the path changes.
        let moon = SwissEphemerisAdapter::moshier()
            .body_longitude(J2000_JD, Body::Moon, Zodiac::Tropical)
            .unwrap();
        assert!((0.0..360.0).contains(&moon));
    }

    #[test]
    fn test_moshier_needs_no_path() {
        let adapter = SwissEphemerisAdapter::new(
            Some(PathBuf::from("/definitely/not/a/swisseph/dir")),
            EphemerisSource::Moshier,
        )
        .unwrap();
        assert_eq!(adapter.source(), EphemerisSource::Moshier);
    }

    #[test]
    fn test_swiss_julday_matches_formula() {
        let adapter = SwissEphemerisAdapter::moshier();
        let utc = chrono::TimeZone::with_ymd_and_hms(&Utc, 1990, 1, 1, 5, 0, 0).unwrap();
        assert!((adapter.julian_day(&utc) - time::julian_day(&utc)).abs() < 1e-9);
    }
}
