//! Route definitions for the CercoOffro login API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::telegram, middleware::AppState};

/// Create Telegram authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/telegram/verify", post(telegram::verify_login))
        .route(
            "/api/auth/telegram/users/{chat_id}",
            get(telegram::get_user_profile),
        )
}

/// Create all API routes
pub fn create_routes() -> Router<AppState> {
    Router::new().merge(auth_routes())
}
