use anyhow::Result;
use profile_analyzer::start_web_server;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("profile_analyzer=info,rocket::server=OFF")),
        )
        .init();

    let port = match std::env::var("ROCKET_PORT") {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?,
        Err(_) => 8000,
    };

    info!("Starting Profile Completeness Analyzer API");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(port).await
}
