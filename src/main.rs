//! Maintenance management API server
//!
//! Reads its configuration from the YAML file named by `MAINTENANCE_CONFIG`
//! (defaults apply when unset). `DATABASE_URL` overrides
//! `storage.database_url`.

use anyhow::Result;
use maintenance::config::AppConfig;
use maintenance::server::ServerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maintenance=info,tower_http=info".into()),
        )
        .init();

    let mut config = match std::env::var("MAINTENANCE_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::from_yaml_file(&path)?
        }
        Err(_) => AppConfig::default(),
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.storage.database_url = Some(url);
    }

    if config.auth.users.is_empty() {
        tracing::warn!("no users configured; every write will be refused");
    }

    ServerBuilder::from_config(&config)
        .await?
        .serve(&config.bind_address())
        .await
}
