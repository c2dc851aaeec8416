//! HTTP surface for chart and rajju calculations.

pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

pub use error::ApiError;
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::read_root))
        .route(
            "/get_rasi_nakshatra_planets/",
            post(routes::get_rasi_nakshatra_planets),
        )
        .route(
            "/get_rasi_nakshatra_planets",
            post(routes::get_rasi_nakshatra_planets),
        )
        .route("/get_rajju_match/", post(routes::get_rajju_match))
        .route("/get_rajju_match", post(routes::get_rajju_match))
        .with_state(state)
}
