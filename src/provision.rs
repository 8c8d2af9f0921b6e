// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The provisioning pipeline: preflight, namespace, service, deployment,
//! rollout wait, report. Fully sequential; the first failure aborts the run
//! with no rollback of already-submitted resources.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{
    apply, ensure_can_deploy, ensure_namespace_exists, list_provisioned, wait_for_rollout,
};
use crate::manifests;
use crate::names::ResourceNames;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::{Api, Client};
use tracing::{info, instrument};

pub struct Provisioner {
    client: Client,
    config: Config,
}

impl Provisioner {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Run the full provisioning sequence for one connector.
    #[instrument(skip(self), fields(workload = %names.workload))]
    pub async fn run(&self, names: &ResourceNames, port: u16) -> Result<()> {
        let namespace = &self.config.namespace;

        ensure_can_deploy(&self.client, namespace).await?;
        ensure_namespace_exists(&self.client, namespace).await?;

        let service = manifests::service(names, namespace, port);
        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        apply(&services, &names.service, &service).await?;
        info!("Applied service {}/{}", namespace, names.service);

        let deployment =
            manifests::deployment(names, namespace, port, &self.config.image_repository);
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        apply(&deployments, &names.workload, &deployment).await?;
        info!("Applied deployment {}/{}", namespace, names.workload);

        wait_for_rollout(
            &self.client,
            namespace,
            &names.workload,
            self.config.rollout_timeout,
        )
        .await?;

        let provisioned = list_provisioned(&self.client, namespace, &names.selector()).await?;
        for resource in &provisioned {
            println!("{}", resource);
        }

        Ok(())
    }
}
