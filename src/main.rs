mod config;
mod routes;

use config::HubConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HubConfig::from_env()?;
    if config.backend_url.is_empty() {
        tracing::warn!("HUB_BACKEND_URL not set; the hub will call /api on its own origin");
    }

    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, backend = %config.backend_url, "democracy hub listening");
    axum::serve(listener, app).await?;
    Ok(())
}
