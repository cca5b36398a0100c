use anyhow::Context;

use portfolio::config::get_configuration;
use portfolio::startup::AppServer;
use portfolio::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "portfolio".into(),
        "info".into(),
        std::io::stdout,
    ))?;

    let configuration = get_configuration().context("Failed to load configuration")?;
    let server = AppServer::build(configuration).await?;

    server.run_until_stopped().await?;

    Ok(())
}
