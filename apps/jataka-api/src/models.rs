use jataka::{ChartRequest, GeoLocation, RajjuOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to the API!".to_string(),
        }
    }
}

/// Body of `POST /get_rasi_nakshatra_planets/`.
#[derive(Debug, Clone, Deserialize)]
pub struct BirthData {
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    /// Time of birth, `HH:MM:SS`.
    pub tob: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub house_system: Option<String>,
    /// `+HH:MM`; the configured offset applies when absent.
    #[serde(default)]
    pub utc_offset: Option<String>,
}

impl BirthData {
    pub fn into_chart_request(self, default_house_system: &str) -> ChartRequest {
        ChartRequest {
            dob: self.dob,
            tob: self.tob,
            location: GeoLocation {
                lat: self.latitude,
                lon: self.longitude,
            },
            house_system: self
                .house_system
                .unwrap_or_else(|| default_house_system.to_string()),
            utc_offset: self.utc_offset,
        }
    }
}

/// Body of `POST /get_rajju_match/`.
#[derive(Debug, Clone, Deserialize)]
pub struct RajjuRequest {
    pub boy_nakshatra: String,
    pub girl_nakshatra: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RajjuResponse {
    pub match_result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boy_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub girl_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_group: Option<String>,
}

impl From<RajjuOutcome> for RajjuResponse {
    fn from(outcome: RajjuOutcome) -> Self {
        let mut response = Self {
            match_result: outcome.message().to_string(),
            points: outcome.points(),
            boy_group: None,
            girl_group: None,
            common_group: None,
        };
        match outcome {
            RajjuOutcome::Success {
                boy_group,
                girl_group,
            } => {
                response.boy_group = Some(boy_group.label().to_string());
                response.girl_group = Some(girl_group.label().to_string());
            }
            RajjuOutcome::NoAgreement { common_group } => {
                response.common_group = Some(common_group.label().to_string());
            }
            RajjuOutcome::InvalidNakshatra => {}
        }
        response
    }
}
