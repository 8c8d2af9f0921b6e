// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("environment error: {0}")]
    Environment(String),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("namespace operation failed: {0}")]
    Namespace(String),

    #[error("rollout failed: {0}")]
    Rollout(String),

    #[error("failed to render manifest: {0}")]
    Render(#[from] serde_yaml::Error),
}

impl ConnectorError {
    /// Process exit code for this failure. Validation and environment
    /// problems exit 1 before any cluster mutation; API-side failures exit 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Environment(_) | Self::Render(_) => 1,
            Self::Kube(_) | Self::Namespace(_) | Self::Rollout(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
