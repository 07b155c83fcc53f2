use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use frnds_store::StoreError;
use frnds_types::api::ErrorBody;
use frnds_types::profile::id_field;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0} required")]
    MissingField(&'static str),

    #[error("{0} must be a UUID")]
    MalformedId(&'static str),

    #[error("Bad request: {0}")]
    Body(#[from] JsonRejection),

    #[error("Bad request: {0}")]
    Query(#[from] QueryRejection),

    #[error("Not found")]
    NoRoute,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Poisoned) => StatusCode::INTERNAL_SERVER_ERROR,
            // Oversized bodies keep their 413; every other body problem is a 400.
            ApiError::Body(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::MissingField(_)
            | ApiError::MalformedId(_)
            | ApiError::Body(_)
            | ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::NoRoute => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

/// Unwraps a field the caller was required to send.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or(ApiError::MissingField(field))
}

/// Reads a UUID field from a loosely typed body, telling a missing field
/// apart from one that was sent but does not parse.
pub fn required_id(body: &Value, field: &'static str) -> Result<Uuid, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ApiError::MissingField(field)),
        Some(_) => id_field(body, field).ok_or(ApiError::MalformedId(field)),
    }
}
