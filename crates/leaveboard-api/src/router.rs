//! Route definitions for the Leaveboard HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes, threading `AppState` through
/// every handler.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(personnel_routes())
        .merge(auth_routes())
        .merge(leave_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Personnel registration and profile
fn personnel_routes() -> Router<AppState> {
    Router::new()
        .route("/personnel", post(handlers::personnel::register))
        .route(
            "/personnel/{personnel_id}",
            get(handlers::personnel::get_personnel),
        )
}

/// Credential login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth", post(handlers::auth::login))
}

/// Leave calendar
fn leave_routes() -> Router<AppState> {
    Router::new()
        .route("/leaves", get(handlers::leave::leaves_on_day))
        .route("/leaves/{leave_id}", get(handlers::leave::get_leave))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
