// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::error::ErrorKind;
use clap::Parser;
use kube::Client;
use tracing::info;

use connectorctl::cli::Args;
use connectorctl::config::Config;
use connectorctl::error::{ConnectorError, Result};
use connectorctl::manifests;
use connectorctl::names::{parse_port, ResourceNames};
use connectorctl::provision::Provisioner;

#[tokio::main]
async fn main() {
    // Initialize tracing; progress goes to stdout, diagnostics to stderr
    tracing_subscriber::fmt::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            eprint!("{}", e);
            std::process::exit(0);
        }
        Err(e) => {
            eprint!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("connectorctl: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_env()?;
    let names = ResourceNames::derive(&args.name)?;
    let port = parse_port(&args.port)?;

    if args.dry_run {
        print!(
            "{}",
            manifests::render_yaml(&names, &config.namespace, port, &config.image_repository)?
        );
        return Ok(());
    }

    let client = Client::try_default().await.map_err(|e| {
        ConnectorError::Environment(format!("failed to initialize Kubernetes client: {}", e))
    })?;
    info!("Connected to Kubernetes cluster");

    Provisioner::new(client, config).run(&names, port).await
}
