//! Ayanamsa: the offset between the tropical and a sidereal zodiac.
//!
//! Each system is anchored by its value at J2000.0; the offset at any other
//! epoch adds the IAU 2006 general precession in ecliptic longitude.

use std::fmt;
use std::str::FromStr;

/// Julian Day of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ayanamsa {
    /// Lahiri (Chitrapaksha), the Indian government standard.
    #[default]
    Lahiri,
    FaganBradley,
    DeLuce,
    Raman,
    Krishnamurti,
    Yukteshwar,
    DjwhalKhul,
    /// Spica at 0° Libra, anchored at its J2000 mean position.
    TrueCitra,
    /// Zero at the Kali Yuga epoch of Aryabhata (499 CE).
    Aryabhata,
}

/// (name, system); aliases share a system.
const AYANAMSAS: &[(&str, Ayanamsa)] = &[
    ("lahiri", Ayanamsa::Lahiri),
    ("chitrapaksha", Ayanamsa::Lahiri),
    ("fagan_bradley", Ayanamsa::FaganBradley),
    ("de_luce", Ayanamsa::DeLuce),
    ("raman", Ayanamsa::Raman),
    ("krishnamurti", Ayanamsa::Krishnamurti),
    ("yukteshwar", Ayanamsa::Yukteshwar),
    ("djwhal_khul", Ayanamsa::DjwhalKhul),
    ("true_citra", Ayanamsa::TrueCitra),
    ("aryabhata", Ayanamsa::Aryabhata),
];

impl Ayanamsa {
    /// Ayanamsa at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            // Swiss Ephemeris SIDM_LAHIRI at J2000
            Self::Lahiri => 23.857_092,
            // SVP 335°57'28.64" at B1950, precessed to J2000
            Self::FaganBradley => 24.740_3,
            Self::DeLuce => 21.619,
            Self::Raman => 22.370,
            Self::Krishnamurti => 23.850,
            Self::Yukteshwar => 22.376,
            Self::DjwhalKhul => 22.883,
            // Spica J2000 ecliptic longitude minus 180°
            Self::TrueCitra => 23.841_357,
            // JD 1903396.7895 precessed forward
            Self::Aryabhata => 20.895_011,
        }
    }

    pub fn name(self) -> &'static str {
        AYANAMSAS
            .iter()
            .find(|(_, system)| *system == self)
            .map(|(name, _)| *name)
            .unwrap_or("lahiri")
    }

    /// Mean ayanamsa in degrees for a Julian Day.
    pub fn value_deg(self, jd: f64) -> f64 {
        self.reference_j2000_deg() + general_precession_longitude_deg(julian_centuries(jd))
    }

    /// Ayanamsa against the true equinox of date: the mean value plus
    /// nutation in longitude. Use it with true-equinox positions such as the
    /// ascendant.
    pub fn true_value_deg(self, jd: f64) -> f64 {
        self.value_deg(jd) + crate::nutation::delta_psi_deg(jd)
    }
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// IAU 2006 general precession in ecliptic longitude (degrees) for `t`
/// Julian centuries since J2000.0.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec =
        5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5;
    arcsec / 3600.0
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
pub struct InvalidAyanamsa {
    pub ayanamsa: String,
    pub valid: Vec<String>,
}

impl FromStr for Ayanamsa {
    type Err = InvalidAyanamsa;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        AYANAMSAS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, system)| *system)
            .ok_or_else(|| InvalidAyanamsa {
                ayanamsa: s.to_string(),
                valid: AYANAMSAS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

impl fmt::Display for Ayanamsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precession_zero_at_j2000() {
        assert_eq!(general_precession_longitude_deg(0.0), 0.0);
        assert_eq!(Ayanamsa::Lahiri.value_deg(J2000_JD), 23.857_092);
    }

    #[test]
    fn test_lahiri_grows_about_fifty_arcsec_per_year() {
        let one_year = 365.25;
        let delta = Ayanamsa::Lahiri.value_deg(J2000_JD + one_year)
            - Ayanamsa::Lahiri.value_deg(J2000_JD);
        assert!((delta * 3600.0 - 50.29).abs() < 0.05, "delta = {delta}");
    }

    #[test]
    fn test_lahiri_1990() {
        // 1990-01-01 05:00 UT
        let value = Ayanamsa::Lahiri.value_deg(2_447_892.708_333);
        assert!((value - 23.72).abs() < 0.01, "value = {value}");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Lahiri".parse::<Ayanamsa>().unwrap(), Ayanamsa::Lahiri);
        assert_eq!("chitrapaksha".parse::<Ayanamsa>().unwrap(), Ayanamsa::Lahiri);
        assert_eq!("raman".parse::<Ayanamsa>().unwrap(), Ayanamsa::Raman);
        assert_eq!("true_citra".parse::<Ayanamsa>().unwrap(), Ayanamsa::TrueCitra);
        assert_eq!("Aryabhata".parse::<Ayanamsa>().unwrap(), Ayanamsa::Aryabhata);
        assert_eq!(Ayanamsa::TrueCitra.to_string(), "true_citra");
        let err = "tropical".parse::<Ayanamsa>().unwrap_err();
        assert!(err.valid.contains(&"lahiri".to_string()));
        assert_eq!(Ayanamsa::default().to_string(), "lahiri");
    }

    #[test]
    fn test_aryabhata_is_zero_at_its_epoch() {
        let value = Ayanamsa::Aryabhata.value_deg(1_903_396.789_532_1);
        assert!(value.abs() < 1e-4, "value = {value}");
    }

    #[test]
    fn test_true_value_adds_nutation() {
        // 1990-01-01 05:00 UT, Δψ ≈ +11.83"
        let jd = 2_447_892.708_333;
        let extra = (Ayanamsa::Lahiri.true_value_deg(jd) - Ayanamsa::Lahiri.value_deg(jd)) * 3600.0;
        assert!((extra - 11.83).abs() < 0.05, "extra = {extra}");
    }
}
