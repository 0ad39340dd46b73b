//! shield-rs: Charity solicitation scam analyzer
//!
//! HTTP service exposing the scam signal scorer over a single
//! analyze endpoint.

use shield_rs::api::ApiServer;
use shield_rs::config::ShieldConfig;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shield_rs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shield-rs v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = if let Some(config_path) = std::env::args().nth(1) {
        info!("Loading configuration from {}", config_path);
        ShieldConfig::from_file(Path::new(&config_path))?
    } else {
        info!("No config file specified, using development defaults");
        ShieldConfig::development()
    };
    config.validate()?;

    info!("  Analyze API: {}", config.server.listen_addr);
    info!("  Scam threshold: {}", config.analyzer.scam_threshold);

    let server = ApiServer::new(&config);
    server.run().await?;

    Ok(())
}
