//! Application state shared across request handlers

use crate::{db::UserDirectory, session, AppResult, WebConfig};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use tracing::info;

/// Application state, constructed once at startup and cloned into the router
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// Persistent user directory
    pub directory: UserDirectory,
    /// Key used to sign session and notice cookies
    signing_key: Key,
}

impl AppState {
    /// Create a new application state
    pub async fn new(config: WebConfig) -> AppResult<Self> {
        let directory = UserDirectory::connect(&config.database_url).await?;
        let signing_key = session::derive_signing_key(&config.secret_key);

        info!("Application state initialized successfully");
        Ok(Self {
            config,
            directory,
            signing_key,
        })
    }
}

// Lets SignedCookieJar extract its signing key from the router state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.signing_key.clone()
    }
}
