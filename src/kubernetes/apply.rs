// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side apply for the generated manifests.

use crate::constants::FIELD_MANAGER;
use crate::error::Result;
use kube::api::{Api, Patch, PatchParams};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::debug;

/// Apply a manifest via server-side apply. Create-or-update semantics and
/// idempotence come from the API server's apply contract, not from this
/// tool.
pub async fn apply<K>(api: &Api<K>, name: &str, resource: &K) -> Result<K>
where
    K: Clone + DeserializeOwned + Serialize + Debug,
{
    debug!("Applying manifest for {}", name);
    let pp = PatchParams::apply(FIELD_MANAGER).force();
    Ok(api.patch(name, &pp, &Patch::Apply(resource)).await?)
}
