use axum::{extract::State, Json};
use jataka::{rajju_match, Chart};
use log::info;

use crate::{
    error::ApiError,
    models::{BirthData, RajjuRequest, RajjuResponse, WelcomeResponse},
    state::AppState,
};

pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

pub async fn get_rasi_nakshatra_planets(
    State(state): State<AppState>,
    Json(data): Json<BirthData>,
) -> Result<Json<Chart>, ApiError> {
    info!(
        "Chart request: {} {} at ({}, {})",
        data.dob, data.tob, data.latitude, data.longitude
    );
    let request = data.into_chart_request(&state.default_house_system);
    let calculator = state.calculator.clone();

    let chart = tokio::task::spawn_blocking(move || calculator.compute(&request))
        .await
        .map_err(|e| ApiError::Worker(e.to_string()))??;

    info!(
        "Chart computed: {} / {} pada {}",
        chart.rasi, chart.nakshatra, chart.pada
    );
    Ok(Json(chart))
}

pub async fn get_rajju_match(Json(data): Json<RajjuRequest>) -> Json<RajjuResponse> {
    let outcome = rajju_match(&data.boy_nakshatra, &data.girl_nakshatra);
    info!(
        "Rajju match {} / {}: {}",
        data.boy_nakshatra,
        data.girl_nakshatra,
        outcome.message()
    );
    Json(outcome.into())
}
