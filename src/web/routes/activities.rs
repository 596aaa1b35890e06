use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::ActivityMap;
use crate::services::RosterService;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(State(service): State<RosterService>) -> Json<ActivityMap> {
    Json(service.list_activities())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(service): State<RosterService>,
) -> Result<Json<MessageResponse>, ApiError> {
    match service.signup(&activity_name, &query.email) {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(service): State<RosterService>,
) -> Result<Json<MessageResponse>, ApiError> {
    match service.unregister(&activity_name, &query.email) {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
            Err(e.into())
        }
    }
}
