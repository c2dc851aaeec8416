pub mod adapter;
pub mod types;

pub use adapter::{apply_zodiac, Ephemeris, EphemerisError, Equinox, SwissEphemerisAdapter};
pub use types::{Body, EphemerisSource, GeoLocation, HouseSystem, InvalidHouseSystem, Zodiac};
