use anyhow::Context;
use jataka::{
    Ayanamsa, ChartCalculator, Ephemeris, EphemerisSource, HouseSystem, SwissEphemerisAdapter,
    UtcOffset,
};
use jataka_config::JatakaConfig;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<ChartCalculator<dyn Ephemeris>>,
    /// House system used when a request leaves it out.
    pub default_house_system: String,
}

impl AppState {
    pub fn new(calculator: ChartCalculator<dyn Ephemeris>) -> Self {
        Self {
            calculator: Arc::new(calculator),
            default_house_system: HouseSystem::default().code().to_string(),
        }
    }

    pub fn with_default_house_system(mut self, house_system: impl Into<String>) -> Self {
        self.default_house_system = house_system.into();
        self
    }

    /// Build the Swiss Ephemeris adapter and calculator described by `config`.
    pub fn from_config(config: &JatakaConfig) -> anyhow::Result<Self> {
        let source: EphemerisSource = config
            .ephemeris
            .source
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        let ayanamsa: Ayanamsa = config.chart.ayanamsa.parse()?;
        let utc_offset: UtcOffset = config.chart.utc_offset.parse()?;
        config
            .chart
            .house_system
            .parse::<HouseSystem>()
            .context("chart.house_system")?;

        let adapter = SwissEphemerisAdapter::new(config.ephemeris.path.clone(), source)
            .context("Failed to init Swiss Ephemeris")?;
        let ephemeris: Arc<dyn Ephemeris> = Arc::new(adapter);

        log::info!(
            "Chart settings: ayanamsa={}, utc_offset={}, default house system={}",
            ayanamsa,
            utc_offset,
            config.chart.house_system
        );

        let calculator = ChartCalculator::new(ephemeris)
            .with_ayanamsa(ayanamsa)
            .with_utc_offset(utc_offset);
        Ok(Self::new(calculator).with_default_house_system(config.chart.house_system.clone()))
    }
}
