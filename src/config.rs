// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::env;
use std::time::Duration;

use crate::error::{ConnectorError, Result};

const DEFAULT_NAMESPACE: &str = "connectors";
const DEFAULT_IMAGE_REPOSITORY: &str = "docker.io/connector";
const DEFAULT_ROLLOUT_TIMEOUT_SECS: u64 = 300;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace all connector resources are created in
    pub namespace: String,
    /// Image repository prefix; the connector label and `:latest` are appended
    pub image_repository: String,
    /// Upper bound on the rollout wait
    pub rollout_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults so the tool runs with no environment set at all.
    pub fn from_env() -> Result<Self> {
        let namespace =
            env::var("CONNECTOR_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());
        let image_repository = env::var("CONNECTOR_IMAGE_REPOSITORY")
            .unwrap_or_else(|_| DEFAULT_IMAGE_REPOSITORY.to_string());

        let rollout_timeout = match env::var("CONNECTOR_ROLLOUT_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConnectorError::Validation(format!(
                        "CONNECTOR_ROLLOUT_TIMEOUT_SECS must be a number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_ROLLOUT_TIMEOUT_SECS),
        };

        Ok(Config {
            namespace,
            image_repository,
            rollout_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so defaults, overrides and
    // the malformed-timeout case are exercised in one sequential test.
    #[test]
    fn test_from_env() {
        env::remove_var("CONNECTOR_NAMESPACE");
        env::remove_var("CONNECTOR_IMAGE_REPOSITORY");
        env::remove_var("CONNECTOR_ROLLOUT_TIMEOUT_SECS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.namespace, "connectors");
        assert_eq!(config.image_repository, "docker.io/connector");
        assert_eq!(config.rollout_timeout, Duration::from_secs(300));

        env::set_var("CONNECTOR_NAMESPACE", "edge");
        env::set_var("CONNECTOR_IMAGE_REPOSITORY", "registry.local/edge");
        env::set_var("CONNECTOR_ROLLOUT_TIMEOUT_SECS", "30");

        let config = Config::from_env().unwrap();
        assert_eq!(config.namespace, "edge");
        assert_eq!(config.image_repository, "registry.local/edge");
        assert_eq!(config.rollout_timeout, Duration::from_secs(30));

        env::set_var("CONNECTOR_ROLLOUT_TIMEOUT_SECS", "soon");
        assert!(Config::from_env().is_err());

        env::remove_var("CONNECTOR_NAMESPACE");
        env::remove_var("CONNECTOR_IMAGE_REPOSITORY");
        env::remove_var("CONNECTOR_ROLLOUT_TIMEOUT_SECS");
    }
}
