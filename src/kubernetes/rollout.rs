// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment rollout tracking.

use crate::constants::rollout::POLL_INTERVAL_SECS;
use crate::error::{ConnectorError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use kube::{Api, Client};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument};

/// Block until the deployment reports a converged rollout, polling its
/// status at a fixed interval. Exceeding `timeout` is fatal.
#[instrument(skip(client, timeout))]
pub async fn wait_for_rollout(
    client: &Client,
    namespace: &str,
    name: &str,
    timeout: Duration,
) -> Result<()> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let deadline = Instant::now() + timeout;

    info!("Waiting for deployment {} to roll out...", name);

    loop {
        let deployment = deployments.get(name).await?;
        if is_rolled_out(&deployment) {
            info!("Deployment {} successfully rolled out", name);
            return Ok(());
        }

        if Instant::now() >= deadline {
            return Err(ConnectorError::Rollout(format!(
                "deployment {} did not become ready within {}s",
                name,
                timeout.as_secs()
            )));
        }

        debug!("Deployment {} not ready yet, polling again", name);
        sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
    }
}

/// A rollout is complete once the controller has observed the current
/// generation and the updated, ready, and available replica counts have all
/// reached the desired count.
fn is_rolled_out(deployment: &Deployment) -> bool {
    let desired = deployment
        .spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(1);

    let Some(status) = deployment.status.as_ref() else {
        return false;
    };

    let generation_observed = match (deployment.metadata.generation, status.observed_generation) {
        (Some(generation), Some(observed)) => observed >= generation,
        _ => true,
    };

    generation_observed
        && status.updated_replicas.unwrap_or(0) >= desired
        && status.ready_replicas.unwrap_or(0) >= desired
        && status.available_replicas.unwrap_or(0) >= desired
}
