//! Nameboard Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppError, AppResult, AppState, WebConfig};
use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main Nameboard web server
pub struct Server {
    config: WebConfig,
    state: AppState,
}

impl Server {
    /// Create a new server
    pub async fn new(config: WebConfig) -> AppResult<Self> {
        let state = AppState::new(config.clone()).await?;

        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> AppResult<()> {
        let address = self.config.address();

        info!("Starting Nameboard Web Server");
        info!("Server address: http://{}", address);
        info!("Development mode: {}", self.config.dev_mode);

        // Create the application
        let app = create_app(self.state.clone());

        // Create TCP listener
        let listener = TcpListener::bind(&address)
            .await
            .map_err(AppError::Server)?;

        info!("Server listening on http://{}", address);

        // Start the server
        if let Err(e) = serve(listener, app).await {
            error!("Server error: {}", e);
            return Err(AppError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for Server
pub struct ServerBuilder {
    config: WebConfig,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Set database URL
    pub fn database_url<S: Into<String>>(mut self, database_url: S) -> Self {
        self.config.database_url = database_url.into();
        self
    }

    /// Set the cookie-signing secret
    pub fn secret_key<S: Into<String>>(mut self, secret_key: S) -> Self {
        self.config.secret_key = secret_key.into();
        self
    }

    /// Build the server
    pub async fn build(self) -> AppResult<Server> {
        Server::new(self.config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
