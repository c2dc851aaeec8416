pub mod nakshatra;
pub mod rajju;
pub mod rasi;

pub use nakshatra::{nakshatra_for_longitude, Nakshatra, NakshatraPlacement};
pub use rajju::{rajju_match, RajjuGroup, RajjuOutcome};
pub use rasi::Rasi;

/// Normalize degrees to [0, 360). `None` for NaN or infinite input.
pub fn normalize_degrees(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let normalized = value.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    Some(if normalized >= 360.0 { 0.0 } else { normalized })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), Some(0.0));
        assert_eq!(normalize_degrees(360.0), Some(0.0));
        assert_eq!(normalize_degrees(720.0), Some(0.0));
        assert_eq!(normalize_degrees(-10.0), Some(350.0));
        assert_eq!(normalize_degrees(370.0), Some(10.0));
        assert_eq!(normalize_degrees(-1e-18), Some(0.0));
        assert_eq!(normalize_degrees(f64::NAN), None);
        assert_eq!(normalize_degrees(f64::INFINITY), None);
    }
}
