use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use tracing::debug;

use frnds_types::api::{
    FirstMessageRequest, FirstMessageResponse, LikeRequest, LikeResponse, UserQuery,
    UsersResponse,
};

use crate::AppState;
use crate::error::{ApiError, required};

/// Discovery feed: everyone except the caller, in registration order.
pub async fn list_users(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<UserQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = required(query.user_id, "userId")?;
    let users = state.store.list_others(user_id)?;
    debug!("Discovery for {} returned {} users", user_id, users.len());

    Ok(Json(UsersResponse { users }))
}

pub async fn like(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<LikeRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let from = required(req.from_user_id, "fromUserId")?;
    let to = required(req.to_user_id, "toUserId")?;

    let outcome = state.store.like(from, to)?;
    let response = match outcome.matched {
        Some(m) => LikeResponse {
            message: "It's a match!".into(),
            mutual: true,
            match_id: Some(m.id),
        },
        None => LikeResponse {
            message: "Like recorded".into(),
            mutual: outcome.mutual,
            match_id: None,
        },
    };

    Ok(Json(response))
}

/// Opening message: creates the match if the pair has none yet.
pub async fn first_message(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<FirstMessageRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let from = required(req.from_user_id, "fromUserId")?;
    let to = required(req.to_user_id, "toUserId")?;
    let text = required(req.message, "message")?;

    let message = state.store.first_message(from, to, &text)?;

    Ok((
        StatusCode::CREATED,
        Json(FirstMessageResponse {
            ok: true,
            match_id: message.match_id,
        }),
    ))
}
