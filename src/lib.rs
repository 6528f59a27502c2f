//! Nameboard Web Server
//!
//! A small web application for session-based login and per-user profile
//! editing, backed by a single SQLite user directory.

pub mod db;
pub mod handlers;
pub mod notices;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
pub mod templates;

// Re-export main types
pub use server::Server;
pub use state::AppState;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    routes::all_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
    /// Database URL for the user directory
    pub database_url: String,
    /// Secret used to sign session cookies
    pub secret_key: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
            database_url: "sqlite:users.sqlite3".to_string(),
            secret_key: "nameboard-dev-secret".to_string(),
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("NAMEBOARD_HOST").unwrap_or(defaults.host),
            port: std::env::var("NAMEBOARD_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            dev_mode: std::env::var("NAMEBOARD_DEV_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.dev_mode),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            secret_key: std::env::var("NAMEBOARD_SECRET").unwrap_or(defaults.secret_key),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Unknown user: {0}")]
    UnknownUser(String),
}

/// Result type for web operations
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownUser(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("Request failed: {}", self);

        let page = templates::ErrorTemplate::new(status.as_u16(), self.to_string());
        match askama::Template::render(&page) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, self.to_string()).into_response(),
        }
    }
}

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nameboard=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
