use crate::vedic::normalize_degrees;
use serde::{Serialize, Serializer};
use std::fmt;

pub const RASI_SEGMENT_SIZE: f64 = 30.0;

/// The twelve sidereal signs, Mesha at 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rasi {
    Mesha,
    Vrisha,
    Mithuna,
    Kataka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

static RASI_ORDER: [(Rasi, &str); 12] = [
    (Rasi::Mesha, "Mesha"),
    (Rasi::Vrisha, "Vrisha"),
    (Rasi::Mithuna, "Mithuna"),
    (Rasi::Kataka, "Kataka"),
    (Rasi::Simha, "Simha"),
    (Rasi::Kanya, "Kanya"),
    (Rasi::Tula, "Tula"),
    (Rasi::Vrischika, "Vrischika"),
    (Rasi::Dhanu, "Dhanu"),
    (Rasi::Makara, "Makara"),
    (Rasi::Kumbha, "Kumbha"),
    (Rasi::Meena, "Meena"),
];

impl Rasi {
    pub fn all() -> impl Iterator<Item = Rasi> {
        RASI_ORDER.iter().map(|(rasi, _)| *rasi)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        RASI_ORDER[self.index()].1
    }

    /// Sign containing a longitude; `None` for NaN/infinite input.
    pub fn from_longitude(longitude: f64) -> Option<Rasi> {
        let lon = normalize_degrees(longitude)?;
        let index = (lon / RASI_SEGMENT_SIZE).floor() as usize % RASI_ORDER.len();
        Some(RASI_ORDER[index].0)
    }
}

impl fmt::Display for Rasi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Rasi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
