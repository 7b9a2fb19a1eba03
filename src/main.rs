//! Phone MCP Server - Main entry point
//!
//! Serves the phone formatting and validation tools over the Model Context
//! Protocol on stdio.

use anyhow::Result;
use phone_mcp_server::{Config, PhoneMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Build the rule table once; it is shared read-only from here on
    let rules = match config.rule_table() {
        Ok(rules) => Arc::new(rules),
        Err(e) => {
            error!("Failed to build rule table: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Rule table ready: {} specific rules, default {}",
        rules.len(),
        rules.default_rule()
    );

    let server = PhoneMcpServer::new(rules);

    info!("Starting MCP server with stdio transport");
    phone_mcp_server::server::run_server(server).await?;

    info!("Phone MCP Server shutdown complete");
    Ok(())
}
