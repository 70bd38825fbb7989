//! REST API endpoints for the gateway

pub mod check_ins;
pub mod gyms;
pub mod health;
pub mod sessions;
pub mod users;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

/// Create all REST API routes
pub fn create_rest_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(users::create_user_routes())
        .merge(sessions::create_session_routes())
        .merge(gyms::create_gym_routes())
        .merge(check_ins::create_check_in_routes())
}
