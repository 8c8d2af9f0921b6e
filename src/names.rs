// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label sanitization and deterministic resource-name derivation.

use std::collections::BTreeMap;

use crate::constants::{labels, MAX_NAME_LEN, NAME_PREFIX};
use crate::error::{ConnectorError, Result};

/// Normalize a free-text identifier into a DNS-1123 label: lowercased,
/// every character outside `[a-z0-9-]` replaced with a hyphen, leading and
/// trailing hyphens stripped.
pub fn sanitize(identifier: &str) -> String {
    identifier
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

/// Validate a raw port string: digits only, in [1, 65535].
pub fn parse_port(raw: &str) -> Result<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConnectorError::Validation(format!(
            "port must be a number, got '{}'",
            raw
        )));
    }

    match raw.parse::<u64>() {
        Ok(port) if (1..=65535).contains(&port) => Ok(port as u16),
        _ => Err(ConnectorError::Validation(format!(
            "port must be between 1 and 65535, got '{}'",
            raw
        ))),
    }
}

/// Resource names derived from a sanitized connector label. Read-only after
/// derivation; everything downstream (manifests, selectors, the report) is
/// keyed off these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// Sanitized label, also used as the container name
    pub label: String,
    /// Deployment name: `connector-<label>`
    pub workload: String,
    /// Service name: `connector-<label>-service`
    pub service: String,
}

impl ResourceNames {
    /// Sanitize an identifier and derive all resource names from it.
    /// Fails when sanitization leaves nothing, or when a derived name would
    /// exceed the 63-character resource-name limit.
    pub fn derive(identifier: &str) -> Result<Self> {
        let label = sanitize(identifier);
        if label.is_empty() {
            return Err(ConnectorError::Validation(format!(
                "name '{}' contains no usable characters",
                identifier
            )));
        }

        let workload = format!("{}-{}", NAME_PREFIX, label);
        let service = format!("{}-service", workload);

        // The service name is the longest derived name, so checking it
        // covers the whole set.
        if service.len() > MAX_NAME_LEN {
            return Err(ConnectorError::Validation(format!(
                "name '{}' is too long: '{}' exceeds the {}-character resource-name limit",
                identifier, service, MAX_NAME_LEN
            )));
        }

        Ok(ResourceNames {
            label,
            workload,
            service,
        })
    }

    /// Image reference for the connector container.
    pub fn image(&self, repository: &str) -> String {
        format!("{}/{}:latest", repository, self.label)
    }

    /// Labels attached to every provisioned resource.
    pub fn labels(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(labels::APP.to_string(), self.workload.clone())])
    }

    /// Label selector matching the provisioned resources.
    pub fn selector(&self) -> String {
        format!("{}={}", labels::APP, self.workload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_lowercases() {
        assert_eq!(sanitize("API"), "api");
        assert_eq!(sanitize("MyConnector"), "myconnector");
    }

    #[test]
    fn test_sanitize_replaces_symbols_and_spaces() {
        assert_eq!(sanitize("my connector"), "my-connector");
        assert_eq!(sanitize("a@@b"), "a--b");
        assert_eq!(sanitize("pay_ments.v2"), "pay-ments-v2");
    }

    #[test]
    fn test_sanitize_strips_edge_hyphens() {
        assert_eq!(sanitize("--edge--"), "edge");
        assert_eq!(sanitize("(api)"), "api");
    }

    #[test]
    fn test_sanitize_all_symbols_yields_empty() {
        assert_eq!(sanitize("@@@"), "");
        assert_eq!(sanitize("---"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_output_shape() {
        for input in ["API Gateway", "Über-Connector!", "x_1 (beta)", "  hi  "] {
            let label = sanitize(input);
            assert!(
                label
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in '{}'",
                label
            );
            assert!(!label.starts_with('-'));
            assert!(!label.ends_with('-'));
        }
    }

    #[test]
    fn test_parse_port_accepts_bounds() {
        assert_eq!(parse_port("1").unwrap(), 1);
        assert_eq!(parse_port("65535").unwrap(), 65535);
        assert_eq!(parse_port("8080").unwrap(), 8080);
    }

    #[test]
    fn test_parse_port_rejects_out_of_range() {
        assert!(parse_port("0").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_port_rejects_non_numeric() {
        assert!(parse_port("-1").is_err());
        assert!(parse_port("abc").is_err());
        assert!(parse_port("80a").is_err());
        assert!(parse_port("").is_err());
    }

    #[test]
    fn test_derive_names() {
        let names = ResourceNames::derive("API").unwrap();
        assert_eq!(names.label, "api");
        assert_eq!(names.workload, "connector-api");
        assert_eq!(names.service, "connector-api-service");
        assert_eq!(names.image("docker.io/connector"), "docker.io/connector/api:latest");
        assert_eq!(names.selector(), "app=connector-api");
    }

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(
            ResourceNames::derive("Edge Router").unwrap(),
            ResourceNames::derive("Edge Router").unwrap()
        );
    }

    #[test]
    fn test_derive_rejects_empty_label() {
        assert!(ResourceNames::derive("@@@").is_err());
        assert!(ResourceNames::derive("").is_err());
    }

    #[test]
    fn test_derive_rejects_over_long_label() {
        // 45 characters still fits `connector-<label>-service` in 63
        let label = "a".repeat(45);
        assert!(ResourceNames::derive(&label).is_ok());

        let label = "a".repeat(46);
        assert!(ResourceNames::derive(&label).is_err());
    }
}
