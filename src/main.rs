/// Main application entry point
use nasa_explorer::build_app;
use nasa_explorer::config::{AppConfig, DEMO_API_KEY};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    if config.nasa_api_key == DEMO_API_KEY {
        warn!("NASA_API_KEY not set, using the shared {} credential", DEMO_API_KEY);
    }
    info!("Configuration loaded, upstream {}", config.nasa_api_url);

    let app = build_app(&config)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("nasa_explorer listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
