use std::time::Duration;

use tracing::{debug, error, info};

use crate::metrics;
use crate::portainer::PortainerClient;
use crate::store::SnapshotStore;
use crate::types::{ContainerMetric, Snapshot};

/// Polls Portainer and publishes one snapshot per cycle into the store.
#[derive(Debug, Clone)]
pub struct Collector {
    client: PortainerClient,
    store: SnapshotStore,
}

/// What a single cycle saw, for logging and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub endpoints: usize,
    pub containers: usize,
    pub errors: usize,
}

impl Collector {
    pub fn new(client: PortainerClient, store: SnapshotStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Run one collection cycle. Failures end up in `last_error`, never in the return value.
    pub async fn run_cycle(&self) -> CycleReport {
        debug!("Starting collection cycle");
        let previous = self.store.read();

        // Drop the old container list up front so it is never served alongside new data
        self.store.publish(Snapshot {
            metrics: Vec::new(),
            last_error: previous.last_error.clone(),
            last_update: previous.last_update,
        });

        let endpoints = match self.client.list_endpoints().await {
            Ok(endpoints) => endpoints,
            Err(err) => {
                error!("Failed to fetch endpoints: {}", err);
                self.store.publish(Snapshot {
                    metrics: Vec::new(),
                    last_error: Some(err.to_string()),
                    last_update: previous.last_update,
                });
                return CycleReport { errors: 1, ..Default::default() };
            }
        };
        info!("Found {} endpoints", endpoints.len());

        let mut collected: Vec<ContainerMetric> = Vec::new();
        let mut last_error: Option<String> = None;
        let mut errors = 0;

        for endpoint in &endpoints {
            let hostname = endpoint.name.to_lowercase();
            match self.client.list_containers(endpoint.id).await {
                Ok(records) => {
                    info!("Found {} containers on {}", records.len(), hostname);
                    collected.extend(records.iter().map(|raw| metrics::normalize(raw, &hostname)));
                }
                Err(err) => {
                    error!("Failed to fetch containers from {}: {}", hostname, err);
                    last_error = Some(err.to_string());
                    errors += 1;
                }
            }
        }

        let report = CycleReport {
            endpoints: endpoints.len(),
            containers: collected.len(),
            errors,
        };

        self.store.publish(Snapshot {
            metrics: collected,
            last_error,
            last_update: unix_now().max(previous.last_update),
        });

        if errors == 0 {
            info!("Successfully collected {} container metrics", report.containers);
        } else {
            info!(
                "Collected {} container metrics with {} failed endpoints",
                report.containers, errors
            );
        }
        report
    }

    /// Collect forever, sleeping `interval` between the end of one cycle and the start of the next.
    pub async fn run_forever(self, interval: Duration) {
        info!("Starting background collection every {} seconds", interval.as_secs());
        loop {
            self.run_cycle().await;
            debug!("Next collection in {:?}", interval);
            tokio::time::sleep(interval).await;
        }
    }
}

fn unix_now() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
