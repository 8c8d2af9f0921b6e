// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label-filtered listing of provisioned resources.

use crate::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Pod, Service};
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::instrument;

/// A provisioned resource, reported as `<kind>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedResource {
    pub kind: &'static str,
    pub name: String,
}

impl std::fmt::Display for ProvisionedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// List the deployments, services, and pods carrying the derived label, for
/// operator confirmation after a rollout.
#[instrument(skip(client))]
pub async fn list_provisioned(
    client: &Client,
    namespace: &str,
    label_selector: &str,
) -> Result<Vec<ProvisionedResource>> {
    let lp = ListParams::default().labels(label_selector);
    let mut provisioned = Vec::new();

    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    for deployment in deployments.list(&lp).await?.items {
        provisioned.push(ProvisionedResource {
            kind: "deployment",
            name: deployment.name_any(),
        });
    }

    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    for service in services.list(&lp).await?.items {
        provisioned.push(ProvisionedResource {
            kind: "service",
            name: service.name_any(),
        });
    }

    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    for pod in pods.list(&lp).await?.items {
        provisioned.push(ProvisionedResource {
            kind: "pod",
            name: pod.name_any(),
        });
    }

    Ok(provisioned)
}
