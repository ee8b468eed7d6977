/**
 * todovault Server Entry Point
 *
 * Loads configuration, initializes tracing, builds the Axum app, and
 * serves it.
 */

use todovault::server::config::ServerConfig;
use todovault::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        "Starting in {:?} mode on port {}",
        config.environment,
        config.port
    );

    // A database failure here is fatal; there is nothing to serve without it
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
