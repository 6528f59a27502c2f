//! Nameboard Web Server
//!
//! Session-based login and per-user profile editing over a SQLite user directory.

use clap::Parser;
use nameboard::server::ServerBuilder;
use nameboard::{init_logging, WebConfig};

/// Nameboard Web Server - session-gated user directory
#[derive(Parser)]
#[command(name = "nameboard")]
#[command(about = "A session-gated user directory")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Database URL for the user directory
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging first
    std::env::set_var(
        "RUST_LOG",
        format!("nameboard={},tower_http=debug", args.log_level),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create web configuration
    let mut config = WebConfig::from_env();

    // Override with command line arguments
    config.host = args.host;
    config.port = args.port;
    config.dev_mode = args.dev;
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    // Print startup information
    println!("🚀 Starting Nameboard Web Server");
    println!("📍 Server: http://{}:{}", config.host, config.port);
    println!("🗄️  Database: {}", config.database_url);
    println!("🔧 Development mode: {}", config.dev_mode);

    // Build and start the server
    let server = match ServerBuilder::new()
        .host(config.host.clone())
        .port(config.port)
        .dev_mode(config.dev_mode)
        .database_url(config.database_url.clone())
        .secret_key(config.secret_key.clone())
        .build()
        .await
    {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    // Start the server (this will block until shutdown)
    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }
}
