// ABOUTME: Platewise server binary - loads config, wires resources, serves the HTTP API
// ABOUTME: Production entry point with structured logging and graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! # Platewise API Server Binary
//!
//! Starts the food image analysis API: classifier, rules pipeline,
//! session registry, and `SQLite` persistence behind an axum router.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use platewise_core::store::StaticNutritionStore;
use platewise_providers::{Classifier as _, SyntheticClassifier};
use platewise_server::database::Database;
use platewise_server::{logging, routes, ServerConfig, ServerResources};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "platewise-server")]
#[command(about = "Platewise - food image analysis API with nutrition scoring")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Platewise API server");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url).await?;
    info!("Database initialized: {}", config.database_url);

    let store = Arc::new(StaticNutritionStore::new());
    let classifier = Arc::new(SyntheticClassifier::new());
    info!("Classifier ready: {}", classifier.model_name());

    let bind_addr = format!("{}:{}", config.host, config.http_port);
    let resources = Arc::new(ServerResources::new(config, database, classifier, store));
    let router = routes::create_router(resources);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {bind_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    // Serve until interrupted; a failed signal hook would leave no way to
    // stop cleanly, so surface it loudly instead of ignoring it.
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    }
    info!("Shutdown signal received");
}
