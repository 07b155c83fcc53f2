use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use tracing::debug;

use frnds_types::ProfilePatch;
use frnds_types::api::{PingRequest, UserResponse};

use crate::AppState;
use crate::error::{ApiError, required, required_id};

/// Applies the well-typed fields of the body and ignores the rest.
pub async fn update_profile(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = required_id(&body, "userId")?;
    let patch = ProfilePatch::from_json(&body);
    if patch.is_empty() {
        debug!("Profile update for {} carried no applicable fields", user_id);
    }

    let user = state.store.update_profile(user_id, &patch)?;
    Ok(Json(UserResponse { user }))
}

pub async fn ping(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<PingRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = required(req.user_id, "userId")?;
    let user = state.store.ping(user_id)?;
    Ok(Json(UserResponse { user }))
}
