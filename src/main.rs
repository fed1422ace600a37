//! Tasklist HTTP server entry point.

use tasklist::{config::AppConfig, server};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = AppConfig::from_env()?;
    config.logging.init()?;
    server::run(config).await?;
    Ok(())
}
