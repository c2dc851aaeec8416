//! Sidereal birth-chart placements and rajju compatibility.
//!
//! The heavy lifting (planetary positions, house math) is delegated to an
//! [`ephemeris::Ephemeris`] implementation; this crate converts birth time to
//! a Julian Day, buckets the Moon into rasi/nakshatra/pada and runs the
//! five-group rajju lookup.

pub mod ayanamsa;
pub mod chart;
pub mod ephemeris;
pub mod nutation;
pub mod time;
pub mod vedic;

pub use ayanamsa::Ayanamsa;
pub use chart::{Chart, ChartCalculator, ChartError, ChartRequest};
pub use ephemeris::{
    Body, Ephemeris, EphemerisError, EphemerisSource, GeoLocation, HouseSystem,
    SwissEphemerisAdapter, Zodiac,
};
pub use time::{TimeError, UtcOffset};
pub use vedic::{rajju_match, Nakshatra, NakshatraPlacement, Rasi, RajjuGroup, RajjuOutcome};
