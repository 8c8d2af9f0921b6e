// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Authorization preflight, checked once at startup before any mutation.

use crate::error::{ConnectorError, Result};
use k8s_openapi::api::authorization::v1::{
    ResourceAttributes, SelfSubjectAccessReview, SelfSubjectAccessReviewSpec,
};
use kube::{api::PostParams, Api, Client};
use tracing::{debug, instrument};

/// Verify that the current credentials may create deployments in the target
/// namespace. A denied review fails fast with a diagnostic naming the
/// missing permission.
#[instrument(skip(client))]
pub async fn ensure_can_deploy(client: &Client, namespace: &str) -> Result<()> {
    let reviews: Api<SelfSubjectAccessReview> = Api::all(client.clone());

    let review = SelfSubjectAccessReview {
        spec: SelfSubjectAccessReviewSpec {
            resource_attributes: Some(ResourceAttributes {
                group: Some("apps".to_string()),
                resource: Some("deployments".to_string()),
                verb: Some("create".to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
        ..Default::default()
    };

    let response = reviews.create(&PostParams::default(), &review).await?;

    match response.status {
        Some(status) if status.allowed => {
            debug!("Allowed to create deployments in namespace {}", namespace);
            Ok(())
        }
        Some(status) => {
            let reason = status
                .reason
                .map(|r| format!(": {}", r))
                .unwrap_or_default();
            Err(ConnectorError::Environment(format!(
                "not permitted to create deployments in namespace {}{}",
                namespace, reason
            )))
        }
        None => Err(ConnectorError::Environment(format!(
            "access review for namespace {} returned no status",
            namespace
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{access_review_json, MockService};

    const REVIEW_PATH: &str = "/apis/authorization.k8s.io/v1/selfsubjectaccessreviews";

    #[tokio::test]
    async fn test_granted_review_passes() {
        let client = MockService::new()
            .on_post(REVIEW_PATH, 201, &access_review_json(true, None))
            .into_client();

        ensure_can_deploy(&client, "connectors").await.unwrap();
    }

    #[tokio::test]
    async fn test_denied_review_is_an_environment_error() {
        let client = MockService::new()
            .on_post(
                REVIEW_PATH,
                201,
                &access_review_json(false, Some("RBAC: no rolebinding")),
            )
            .into_client();

        let err = ensure_can_deploy(&client, "connectors").await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
        match err {
            ConnectorError::Environment(msg) => {
                assert!(msg.contains("connectors"));
                assert!(msg.contains("RBAC"));
            }
            other => panic!("expected environment error, got {:?}", other),
        }
    }
}
