//! Route definitions for the Nameboard web server
//!
//! This module defines all the routes for the web application.

use crate::{handlers, AppState};
use axum::{routing::get, Router};

/// Create the page routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(handlers::home))
        // Directory listing
        .route("/view", get(handlers::view_directory))
        // Session lifecycle
        .route(
            "/login",
            get(handlers::login_form).post(handlers::login_submit),
        )
        .route("/logout", get(handlers::logout))
        // Profile
        .route(
            "/user",
            get(handlers::show_profile).post(handlers::update_profile),
        )
        // Health check
        .route("/health", get(handlers::health_check))
}

/// Create the admin mount routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/home", get(handlers::home))
        .route("/test", get(handlers::test_page))
}

/// Create all routes combined
pub fn all_routes() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .nest("/admin", admin_routes())
}
