//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use crate::vedic::normalize_degrees;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

// (nakshatra, display_name, planetary lord)
pub static NAKSHATRA_ORDER: [(Nakshatra, &str, &str); 27] = [
    (Nakshatra::Ashwini, "Ashwini", "Ketu"),
    (Nakshatra::Bharani, "Bharani", "Venus"),
    (Nakshatra::Krittika, "Krittika", "Sun"),
    (Nakshatra::Rohini, "Rohini", "Moon"),
    (Nakshatra::Mrigashira, "Mrigashira", "Mars"),
    (Nakshatra::Ardra, "Ardra", "Rahu"),
    (Nakshatra::Punarvasu, "Punarvasu", "Jupiter"),
    (Nakshatra::Pushya, "Pushya", "Saturn"),
    (Nakshatra::Ashlesha, "Ashlesha", "Mercury"),
    (Nakshatra::Magha, "Magha", "Ketu"),
    (Nakshatra::PurvaPhalguni, "Purva Phalguni", "Venus"),
    (Nakshatra::UttaraPhalguni, "Uttara Phalguni", "Sun"),
    (Nakshatra::Hasta, "Hasta", "Moon"),
    (Nakshatra::Chitra, "Chitra", "Mars"),
    (Nakshatra::Swati, "Swati", "Rahu"),
    (Nakshatra::Vishakha, "Vishakha", "Jupiter"),
    (Nakshatra::Anuradha, "Anuradha", "Saturn"),
    (Nakshatra::Jyeshtha, "Jyeshtha", "Mercury"),
    (Nakshatra::Mula, "Mula", "Ketu"),
    (Nakshatra::PurvaAshadha, "Purva Ashadha", "Venus"),
    (Nakshatra::UttaraAshadha, "Uttara Ashadha", "Sun"),
    (Nakshatra::Shravana, "Shravana", "Moon"),
    (Nakshatra::Dhanishta, "Dhanishta", "Mars"),
    (Nakshatra::Shatabhisha, "Shatabhisha", "Rahu"),
    (Nakshatra::PurvaBhadrapada, "Purva Bhadrapada", "Jupiter"),
    (Nakshatra::UttaraBhadrapada, "Uttara Bhadrapada", "Saturn"),
    (Nakshatra::Revati, "Revati", "Mercury"),
];

/// Alternate spellings accepted by [`Nakshatra::from_name`]. Bare "Purva" and
/// "Uttara" name three mansions each and are deliberately absent.
const NAKSHATRA_ALIASES: &[(&str, Nakshatra)] = &[
    ("Aswini", Nakshatra::Ashwini),
    ("Ashvini", Nakshatra::Ashwini),
    ("Krithika", Nakshatra::Krittika),
    ("Kritika", Nakshatra::Krittika),
    ("Mrigasira", Nakshatra::Mrigashira),
    ("Mrigashirsha", Nakshatra::Mrigashira),
    ("Arudra", Nakshatra::Ardra),
    ("Pushyami", Nakshatra::Pushya),
    ("Aslesha", Nakshatra::Ashlesha),
    ("Ashlesa", Nakshatra::Ashlesha),
    ("Purvaphalguni", Nakshatra::PurvaPhalguni),
    ("Pubba", Nakshatra::PurvaPhalguni),
    ("Uttaraphalguni", Nakshatra::UttaraPhalguni),
    ("Uttaphalguni", Nakshatra::UttaraPhalguni),
    ("Svati", Nakshatra::Swati),
    ("Visakha", Nakshatra::Vishakha),
    ("Vishaka", Nakshatra::Vishakha),
    ("Jyeshta", Nakshatra::Jyeshtha),
    ("Jyestha", Nakshatra::Jyeshtha),
    ("Moola", Nakshatra::Mula),
    ("Purvashadha", Nakshatra::PurvaAshadha),
    ("Purvasadha", Nakshatra::PurvaAshadha),
    ("Uttarashadha", Nakshatra::UttaraAshadha),
    ("Uttarasadha", Nakshatra::UttaraAshadha),
    ("Sravana", Nakshatra::Shravana),
    ("Dhanishtha", Nakshatra::Dhanishta),
    ("Dhanista", Nakshatra::Dhanishta),
    ("Satabhisha", Nakshatra::Shatabhisha),
    ("Shatabhishak", Nakshatra::Shatabhisha),
    ("Purvabhadrapada", Nakshatra::PurvaBhadrapada),
    ("Purvabhadra", Nakshatra::PurvaBhadrapada),
    ("Uttarabhadrapada", Nakshatra::UttaraBhadrapada),
    ("Uttabhadrapada", Nakshatra::UttaraBhadrapada),
    ("Uttarabhadra", Nakshatra::UttaraBhadrapada),
    ("Revathi", Nakshatra::Revati),
];

fn build_name_index() -> HashMap<&'static str, Nakshatra> {
    NAKSHATRA_ORDER
        .iter()
        .map(|(nakshatra, name, _)| (*name, *nakshatra))
        .chain(NAKSHATRA_ALIASES.iter().copied())
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_BY_NAME: HashMap<&'static str, Nakshatra> = build_name_index();
}

impl Nakshatra {
    pub fn all() -> impl Iterator<Item = Nakshatra> {
        NAKSHATRA_ORDER.iter().map(|(nakshatra, _, _)| *nakshatra)
    }

    /// Position in the 27-mansion order, starting at Ashwini = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        NAKSHATRA_ORDER[self.index()].1
    }

    pub fn lord(self) -> &'static str {
        NAKSHATRA_ORDER[self.index()].2
    }

    /// Start of the mansion in sidereal degrees.
    pub fn start(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SEGMENT_SIZE
    }

    /// Exact, case-sensitive lookup of a canonical name or a known alias.
    pub fn from_name(name: &str) -> Option<Nakshatra> {
        NAKSHATRA_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Nakshatra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Nakshatra and pada containing a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NakshatraPlacement {
    pub nakshatra: Nakshatra,
    /// Quarter 1..=4.
    pub pada: u8,
}

/// Return the nakshatra and pada containing the given longitude, or `None`
/// for NaN/infinite input.
///
/// Index and pada are clamped to their tables so rounding just below 360°
/// stays in Revati pada 4.
pub fn nakshatra_for_longitude(longitude: f64) -> Option<NakshatraPlacement> {
    let lon = normalize_degrees(longitude)?;
    let index = ((lon / NAKSHATRA_SEGMENT_SIZE).floor() as usize).min(NAKSHATRA_ORDER.len() - 1);
    let nakshatra = NAKSHATRA_ORDER[index].0;

    let offset = (lon - nakshatra.start()).max(0.0);
    let pada = ((offset / PADA_SIZE).floor() as u8).min(3) + 1;

    Some(NakshatraPlacement { nakshatra, pada })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_enum_order() {
        for (i, (nakshatra, _, _)) in NAKSHATRA_ORDER.iter().enumerate() {
            assert_eq!(nakshatra.index(), i);
        }
        assert_eq!(Nakshatra::all().count(), 27);
    }

    #[test]
    fn test_get_nakshatra_for_longitude() {
        let meta = nakshatra_for_longitude(0.0).unwrap();
        assert_eq!(meta.nakshatra, Nakshatra::Ashwini);
        assert_eq!(meta.nakshatra.lord(), "Ketu");
        assert_eq!(meta.pada, 1);

        let meta2 = nakshatra_for_longitude(13.33).unwrap();
        assert_eq!(meta2.nakshatra, Nakshatra::Ashwini);
        assert_eq!(meta2.pada, 4);

        let meta3 = nakshatra_for_longitude(13.34).unwrap();
        assert_eq!(meta3.nakshatra, Nakshatra::Bharani);
        assert_eq!(meta3.pada, 1);
    }

    #[test]
    fn test_every_boundary_starts_pada_one() {
        for nakshatra in Nakshatra::all() {
            let meta = nakshatra_for_longitude(nakshatra.start() + 1e-9).unwrap();
            assert_eq!(meta.nakshatra, nakshatra);
            assert_eq!(meta.pada, 1);
        }
    }

    #[test]
    fn test_near_360_stays_in_revati() {
        for lon in [359.9996, 359.99964, 359.9999, 360.0 - 1e-12] {
            let meta = nakshatra_for_longitude(lon).unwrap();
            assert_eq!(meta.nakshatra, Nakshatra::Revati, "lon = {lon}");
            assert_eq!(meta.pada, 4, "lon = {lon}");
        }
        assert_eq!(nakshatra_for_longitude(360.0).unwrap().nakshatra, Nakshatra::Ashwini);
    }

    #[test]
    fn test_pada_always_in_range() {
        let mut lon = -720.0;
        while lon < 720.0 {
            let meta = nakshatra_for_longitude(lon).unwrap();
            assert!((1..=4).contains(&meta.pada), "lon = {lon}");
            lon += 0.37;
        }
    }

    #[test]
    fn test_non_finite_longitude() {
        assert!(nakshatra_for_longitude(f64::NAN).is_none());
        assert!(nakshatra_for_longitude(f64::INFINITY).is_none());
    }

    #[test]
    fn test_from_name_canonical_and_aliases() {
        assert_eq!(Nakshatra::from_name("Purva Phalguni"), Some(Nakshatra::PurvaPhalguni));
        assert_eq!(Nakshatra::from_name("Uttaphalguni"), Some(Nakshatra::UttaraPhalguni));
        assert_eq!(Nakshatra::from_name("Uttarasadha"), Some(Nakshatra::UttaraAshadha));
        assert_eq!(Nakshatra::from_name("Moola"), Some(Nakshatra::Mula));
        assert_eq!(Nakshatra::from_name("Purva"), None);
        assert_eq!(Nakshatra::from_name("rohini"), None);
        for nakshatra in Nakshatra::all() {
            assert_eq!(Nakshatra::from_name(nakshatra.name()), Some(nakshatra));
        }
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Nakshatra::UttaraBhadrapada).unwrap();
        assert_eq!(json, "\"Uttara Bhadrapada\"");
    }
}
