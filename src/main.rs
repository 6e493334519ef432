use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use portainer_exporter::api::{self, AppState};
use portainer_exporter::{load_config, Collector, PortainerClient, SnapshotStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = load_config()?;
    init_tracing(&cfg.log_level);
    info!("Starting Portainer Container Status Exporter");
    info!("portainer_url = {}", cfg.portainer_url);

    let client = PortainerClient::from_config(&cfg).context("Failed to build Portainer client")?;
    let store = SnapshotStore::new();
    let collector = Collector::new(client, store.clone());

    let collector_handle = tokio::spawn(collector.run_forever(cfg.scrape_interval));
    let server_handle = tokio::spawn(api::serve(cfg.listen_port, Arc::new(AppState::new(store))));

    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res.context("Failed to listen for shutdown signal")?;
            info!("Shutting down gracefully");
        }
        res = server_handle => {
            match res {
                Ok(Ok(())) => info!("HTTP server stopped"),
                Ok(Err(e)) => {
                    error!("HTTP server failed: {:#}", e);
                    return Err(e);
                }
                Err(e) => return Err(e).context("HTTP server task panicked"),
            }
        }
    }

    collector_handle.abort();
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: failed to install tracing subscriber: {}", e);
    }
}
