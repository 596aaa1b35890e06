use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::services::RosterError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roster(RosterError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApiError::Roster(RosterError::AlreadyRegistered)
            | ApiError::Roster(RosterError::NotRegistered) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
