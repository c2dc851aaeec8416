use jataka::{
    rajju_match, Body, Chart, ChartCalculator, ChartRequest, Ephemeris, EphemerisError,
    GeoLocation, HouseSystem, Nakshatra, Rasi, RajjuOutcome, Zodiac,
};
use std::sync::Arc;

/// Moon at a configurable longitude, every other body at 100°.
struct StubEphemeris {
    moon: f64,
}

impl Ephemeris for StubEphemeris {
    fn body_longitude(&self, _jd: f64, body: Body, _zodiac: Zodiac) -> Result<f64, EphemerisError> {
        Ok(if body == Body::Moon { self.moon } else { 100.0 })
    }

    fn ascendant(
        &self,
        _jd: f64,
        _location: GeoLocation,
        _house_system: HouseSystem,
        _zodiac: Zodiac,
    ) -> Result<f64, EphemerisError> {
        Ok(271.25)
    }
}

fn chart_for_moon(moon: f64) -> Chart {
    let ephemeris: Arc<dyn Ephemeris> = Arc::new(StubEphemeris { moon });
    ChartCalculator::new(ephemeris)
        .compute(&ChartRequest::new("1990-01-01", "10:30:00", 28.6139, 77.2090))
        .unwrap()
}

#[test]
fn test_chart_serializes_to_api_shape() {
    let chart = chart_for_moon(45.0);
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["rasi"], "Vrisha");
    assert_eq!(json["nakshatra"], "Rohini");
    assert_eq!(json["pada"], 2);
    assert_eq!(json["ascendant"], 271.25);
    let planets = json["planets"].as_object().unwrap();
    assert_eq!(planets.len(), 8);
    assert_eq!(planets["Moon"], 45.0);
    assert_eq!(planets["Rahu"], 100.0);
    assert!(planets.contains_key("Sun"));
}

#[test]
fn test_boundary_near_360() {
    let chart = chart_for_moon(359.9998);
    assert_eq!(chart.rasi, Rasi::Meena);
    assert_eq!(chart.nakshatra, Nakshatra::Revati);
    assert_eq!(chart.pada, 4);
}

#[test]
fn test_chart_nakshatra_feeds_rajju_match() {
    // Chart output names are accepted by the matcher unchanged.
    let boy = chart_for_moon(150.0); // Uttara Phalguni
    let girl = chart_for_moon(140.0); // Purva Phalguni
    assert_eq!(boy.nakshatra, Nakshatra::UttaraPhalguni);
    assert_eq!(girl.nakshatra, Nakshatra::PurvaPhalguni);
    let outcome = rajju_match(boy.nakshatra.name(), girl.nakshatra.name());
    assert!(matches!(outcome, RajjuOutcome::Success { .. }));
}

#[test]
fn test_rasi_and_nakshatra_sweep() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let chart = chart_for_moon(lon);
        assert_eq!(chart.rasi.index(), (lon / 30.0).floor() as usize);
        assert!(chart.nakshatra.index() <= 26);
        assert!((1..=4).contains(&chart.pada));
        lon += 0.25;
    }
}
