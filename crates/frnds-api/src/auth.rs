use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use tracing::info;

use frnds_types::Registration;
use frnds_types::api::{LoginRequest, UserResponse};

use crate::AppState;
use crate::error::ApiError;

/// Registration reads its body loosely: unknown or mistyped profile fields
/// fall back to defaults instead of failing the request.
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let reg = Registration::from_json(&body);
    let user = state
        .store
        .register(&reg.username, &reg.password, reg.profile)?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// Plain handle + password check. The returned user carries no credential.
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = state.store.authenticate(&username, &password)?;
    info!("User {} logged in", user.username);

    Ok(Json(UserResponse { user }))
}
