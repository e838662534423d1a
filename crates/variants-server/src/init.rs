//! Server Initialization
//!
//! Startup and shutdown of the HTTP server:
//!
//! 1. Load configuration and apply command line overrides
//! 2. Initialize logging
//! 3. Build the [`AppContext`] (providers, services, health checks)
//! 4. Launch Rocket until it is told to stop
//! 5. Close the store and cache clients

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use variants_domain::error::Error;
use variants_infrastructure::config::loader::validate_app_config;
use variants_infrastructure::config::{AppConfig, ConfigLoader};
use variants_infrastructure::di::{init_app, AppContext};
use variants_infrastructure::logging::init_logging;

use crate::api::build_rocket;
use crate::args::ServerOverrides;

/// Run the Variants API server
pub async fn run(
    config_path: Option<&Path>,
    overrides: ServerOverrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path, &overrides)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        store = %config.store.provider,
        cache = %config.cache.provider,
        "Starting Variants API server"
    );

    let context = Arc::new(init_app(config).await?);
    let served = launch(context.clone()).await;

    context.shutdown().await;
    info!("Variants API server stopped");
    served
}

/// Load configuration from an optional path and apply overrides
pub fn load_config(
    config_path: Option<&Path>,
    overrides: &ServerOverrides,
) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;

    if let Some(host) = &overrides.host {
        config.server.host = host.clone();
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }
    validate_app_config(&config)?;

    Ok(config)
}

/// Serve HTTP until Rocket shuts down
pub async fn launch(context: Arc<AppContext>) -> Result<(), Box<dyn std::error::Error>> {
    let figment = rocket::Config::figment()
        .merge(("address", context.config.server.host.clone()))
        .merge(("port", context.config.server.port));

    info!(
        "HTTP server listening on {}:{}",
        context.config.server.host, context.config.server.port
    );

    build_rocket(context)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| Error::infrastructure(format!("HTTP server failed: {e}")))?;
    Ok(())
}
