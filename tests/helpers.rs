//! Integration test helpers
//!
//! Spawns a full application instance on a random port with a file-backed
//! SQLite directory in a temporary directory, and provides a cookie-aware
//! client that does not follow redirects.

use nameboard::{create_app, AppState, WebConfig};
use std::sync::LazyLock;
use tokio::net::TcpListener;
use uuid::Uuid;

// Make sure tracing is only initialized once
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
});

/// A running test application
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    _db_dir: tempfile::TempDir,
}

impl TestApp {
    /// Fetch the home page
    pub async fn get_home(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Fetch the directory listing
    pub async fn get_view(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/view", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Fetch the login page
    pub async fn get_login(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/login", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Submit the login form
    pub async fn post_login(&self, name: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/login", &self.address))
            .form(&[("name", name)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Fetch the profile page
    pub async fn get_profile(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/user", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Submit the profile form
    pub async fn post_profile(&self, email: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/user", &self.address))
            .form(&[("email", email)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Log out
    pub async fn get_logout(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Health check
    pub async fn get_health(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Fetch an arbitrary path
    pub async fn get_page(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Start a test application on a random port
pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let db_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let db_path = db_dir.path().join("users.sqlite3");

    let config = WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0, // Let the OS choose a free port
        dev_mode: true,
        database_url: format!("sqlite:{}", db_path.display()),
        secret_key: "integration-test-secret".to_string(),
    };

    let state = AppState::new(config).await.unwrap();
    let app = create_app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        api_client: build_client(),
        _db_dir: db_dir,
    }
}

/// A cookie-aware client that does not follow redirects
pub fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// A name unlikely to collide with other tests
pub fn unique_name(prefix: &str) -> String {
    let id = Uuid::new_v4().to_string();
    format!("{}_{}", prefix, &id[..8])
}

/// Assert that a response is a redirect to the given location
pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
