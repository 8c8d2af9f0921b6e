// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Prefix for every resource name derived from a connector label
pub const NAME_PREFIX: &str = "connector";

/// Kubernetes limits DNS-1123 resource names to 63 characters
pub const MAX_NAME_LEN: usize = 63;

/// External port exposed by the load-balanced service
pub const SERVICE_PORT: i32 = 80;

/// The field manager name used for server-side apply
pub const FIELD_MANAGER: &str = "connectorctl";

/// Label keys attached to provisioned resources
pub mod labels {
    /// Selector label key carrying the workload name
    pub const APP: &str = "app";
}

/// Rollout polling configuration
pub mod rollout {
    /// Interval in seconds between deployment status polls
    pub const POLL_INTERVAL_SECS: u64 = 2;
}
