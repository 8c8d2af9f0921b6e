// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API adapter: access preflight, namespace management,
//! server-side apply, rollout tracking, and resource listing.

pub mod access;
pub mod apply;
pub mod namespaces;
pub mod resources;
pub mod rollout;

pub use access::ensure_can_deploy;
pub use apply::apply;
pub use namespaces::ensure_namespace_exists;
pub use resources::list_provisioned;
pub use rollout::wait_for_rollout;
