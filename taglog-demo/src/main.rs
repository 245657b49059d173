//! taglog-demo - exercises the logger end to end
//!
//! ```bash
//! # Log a few lines and exit
//! taglog-demo --once
//!
//! # Use a config file and keep the maintenance task running until Ctrl+C
//! TAGLOG_LOG_LEVEL=debug taglog-demo --config ./taglog.toml
//! ```

mod cli;

use crate::cli::Cli;

use std::error::Error;

use clap::Parser;
use taglog::{AppLogger, install_global};
use taglog_config::AppLoggerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = AppLoggerConfig::load(&cli.config)?;
    config.validate()?;

    let logger = AppLogger::new(config)?;
    install_global(&logger)?;
    logger.spawn_maintenance()?;

    logger.info("DEMO", &["startup"], "Logger ready", &[&cli.config.display().to_string()]);

    let http = logger.child("HTTP");
    http.info("started", &["req"], &["GET /health"]);
    http.warn("slow response", &["req"], &["GET /reports", "1840ms"]);

    let db = logger.child("DB");
    db.debug("pool opened", &[], &["size=8"]);
    db.error("query failed", &["migrations"], &["relation \"users\" does not exist"]);

    log::info!(target: "facade", "log macros route through taglog too");

    if !cli.once {
        logger.info("DEMO", &[], "Waiting for Ctrl+C", &[]);
        match tokio::signal::ctrl_c().await {
            Ok(()) => logger.info("DEMO", &[], "Received SIGINT (Ctrl+C), shutting down", &[]),
            Err(e) => logger.error("DEMO", &[], "Failed to listen for SIGINT", &[&e.to_string()]),
        }
    }

    logger.shutdown().await?;
    Ok(())
}
