// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed manifest builders for the provisioned resource pair.
//!
//! Manifests are constructed as `k8s-openapi` values rather than templated
//! text, so the sanitized label can never break the document structure.

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;

use crate::constants::SERVICE_PORT;
use crate::error::Result;
use crate::names::ResourceNames;

/// Build the LoadBalancer service fronting the connector: external port 80
/// forwarded to the container port, selecting pods by the derived label.
pub fn service(names: &ResourceNames, namespace: &str, port: u16) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(names.service.clone()),
            namespace: Some(namespace.to_string()),
            labels: Some(names.labels()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            type_: Some("LoadBalancer".to_string()),
            selector: Some(names.labels()),
            ports: Some(vec![ServicePort {
                port: SERVICE_PORT,
                target_port: Some(IntOrString::Int(i32::from(port))),
                protocol: Some("TCP".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the single-replica connector deployment: one container using the
/// derived image, listening on the given port, always pulled, always
/// restarted.
pub fn deployment(
    names: &ResourceNames,
    namespace: &str,
    port: u16,
    image_repository: &str,
) -> Deployment {
    let labels = names.labels();

    Deployment {
        metadata: ObjectMeta {
            name: Some(names.workload.clone()),
            namespace: Some(namespace.to_string()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(1),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: names.label.clone(),
                        image: Some(names.image(image_repository)),
                        image_pull_policy: Some("Always".to_string()),
                        ports: Some(vec![ContainerPort {
                            container_port: i32::from(port),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    restart_policy: Some("Always".to_string()),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Render both manifests as a multi-document YAML stream, service first,
/// matching the order they are applied in.
pub fn render_yaml(
    names: &ResourceNames,
    namespace: &str,
    port: u16,
    image_repository: &str,
) -> Result<String> {
    let service = serde_yaml::to_string(&service(names, namespace, port))?;
    let deployment = serde_yaml::to_string(&deployment(names, namespace, port, image_repository))?;
    Ok(format!("{}---\n{}", service, deployment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> ResourceNames {
        ResourceNames::derive("API").unwrap()
    }

    #[test]
    fn test_service_shape() {
        let service = service(&names(), "connectors", 8080);

        assert_eq!(service.metadata.name.as_deref(), Some("connector-api-service"));
        assert_eq!(service.metadata.namespace.as_deref(), Some("connectors"));

        let spec = service.spec.unwrap();
        assert_eq!(spec.type_.as_deref(), Some("LoadBalancer"));
        assert_eq!(
            spec.selector.unwrap().get("app").map(String::as_str),
            Some("connector-api")
        );

        let ports = spec.ports.unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].port, 80);
        assert_eq!(ports[0].target_port, Some(IntOrString::Int(8080)));
    }

    #[test]
    fn test_deployment_shape() {
        let deployment = deployment(&names(), "connectors", 8080, "docker.io/connector");

        assert_eq!(deployment.metadata.name.as_deref(), Some("connector-api"));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some("connectors"));

        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(1));
        assert_eq!(
            spec.selector.match_labels.unwrap().get("app").map(String::as_str),
            Some("connector-api")
        );

        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(pod_spec.restart_policy.as_deref(), Some("Always"));
        assert_eq!(pod_spec.containers.len(), 1);

        let container = &pod_spec.containers[0];
        assert_eq!(container.name, "api");
        assert_eq!(container.image.as_deref(), Some("docker.io/connector/api:latest"));
        assert_eq!(container.image_pull_policy.as_deref(), Some("Always"));
        assert_eq!(
            container.ports.as_ref().unwrap()[0].container_port,
            8080
        );
    }

    #[test]
    fn test_pod_labels_match_selector() {
        let deployment = deployment(&names(), "connectors", 8080, "docker.io/connector");
        let spec = deployment.spec.unwrap();

        assert_eq!(
            spec.selector.match_labels,
            spec.template.metadata.unwrap().labels
        );
    }

    #[test]
    fn test_render_yaml_contains_both_documents() {
        let rendered = render_yaml(&names(), "connectors", 8080, "docker.io/connector").unwrap();

        assert!(rendered.contains("---"));
        assert!(rendered.contains("kind: Service"));
        assert!(rendered.contains("kind: Deployment"));
        assert!(rendered.contains("connector-api-service"));
        assert!(rendered.contains("docker.io/connector/api:latest"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let first = render_yaml(&names(), "connectors", 8080, "docker.io/connector").unwrap();
        let second = render_yaml(&names(), "connectors", 8080, "docker.io/connector").unwrap();
        assert_eq!(first, second);
    }
}
