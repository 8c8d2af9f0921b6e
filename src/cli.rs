// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;

/// Provision a connector workload behind a load-balanced service.
///
/// Both positionals are taken as raw strings: whether a name sanitizes to
/// something usable or a port is in range is a validation concern with its
/// own diagnostics, not a parse failure.
#[derive(Debug, Parser)]
#[command(name = "connectorctl")]
pub struct Args {
    /// Short name for the connector; normalized to a DNS-1123 label
    pub name: String,

    /// Container port the workload listens on (1-65535)
    pub port: String,

    /// Print the generated manifests instead of applying them
    #[arg(long)]
    pub dry_run: bool,
}
