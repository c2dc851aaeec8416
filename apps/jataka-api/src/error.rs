use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jataka::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("Chart computation did not complete: {0}")]
    Worker(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Chart(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Chart(_) | ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Chart request failed: {}", self);
        } else {
            log::info!("Rejected chart request: {}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
