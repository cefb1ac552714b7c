//! Mapping of registrar failures onto HTTP responses.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use registrar::RegistrarError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registrar(#[from] RegistrarError),

    /// Query string missing a required parameter or not decodable.
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Registrar(RegistrarError::ActivityNotFound) => StatusCode::NOT_FOUND,
            Self::Registrar(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Registrar(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Body is `{"detail": "<message>"}`. Storage faults are logged and replaced
/// by a generic message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            error!("Request failed: {self}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
