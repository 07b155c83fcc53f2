pub mod auth;
pub mod discover;
pub mod error;
pub mod messages;
pub mod profile;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use frnds_store::Store;
use frnds_types::api::HealthResponse;

use crate::error::ApiError;

/// Request body cap when none is configured.
pub const DEFAULT_BODY_LIMIT: usize = 7 * 1024 * 1024;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

impl AppStateInner {
    pub fn new(store: Store) -> AppState {
        Arc::new(Self { store })
    }
}

/// All routes, served both at the root and under `/api`. Unknown paths and
/// unsupported methods both answer with a JSON 404.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/update-profile", post(profile::update_profile))
        .route("/ping", post(profile::ping))
        .route("/users", get(discover::list_users))
        .route("/like", post(discover::like))
        .route("/first-message", post(discover::first_message))
        .route("/matches", get(messages::list_matches))
        .route("/messages", get(messages::get_messages))
        .route("/message", post(messages::send_message))
        .method_not_allowed_fallback(not_found)
        .with_state(state);

    Router::new()
        .nest("/api", routes.clone())
        .merge(routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// The router with the HTTP layers the server runs it behind: body cap,
/// permissive CORS and request tracing.
pub fn app(state: AppState, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let stats = state.store.stats()?;
    Ok(Json(HealthResponse {
        ok: true,
        users: stats.users,
        matches: stats.matches,
    }))
}

async fn not_found() -> ApiError {
    ApiError::NoRoute
}
