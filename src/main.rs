use anyhow::Context;
use contact_service::config::ServiceConfig;
use contact_service::lifecycle::{setup_tracing, ContactSystem};
use contact_service::server::Server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ServiceConfig::load().context("invalid configuration")?;
    info!(?config, "Starting contact service");

    let system = ContactSystem::new(config.channel_capacity);
    let server = Server::new(config, system.contact_client.clone());

    server.run().await.context("contact service failed")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Contact service stopped");
    Ok(())
}
