use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;

use frnds_types::api::{
    MatchesResponse, MessageQuery, MessagesResponse, SendMessageRequest, SendMessageResponse,
    UserQuery,
};

use crate::AppState;
use crate::error::{ApiError, required};

pub async fn list_matches(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<UserQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = required(query.user_id, "userId")?;
    let matches = state.store.matches_for(user_id)?;

    Ok(Json(MatchesResponse { matches }))
}

/// Conversation for one match, oldest first. An unknown match id yields an
/// empty list rather than an error.
pub async fn get_messages(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<MessageQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let match_id = required(query.match_id, "matchId")?;
    let messages = state.store.messages_for(match_id)?;

    Ok(Json(MessagesResponse { messages }))
}

pub async fn send_message(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SendMessageRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let match_id = required(req.match_id, "matchId")?;
    let from = required(req.from_user_id, "fromUserId")?;
    let to = required(req.to_user_id, "toUserId")?;
    let text = required(req.message, "message")?;

    let message = state.store.send_message(match_id, from, to, &text)?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse { ok: true, message }),
    ))
}
