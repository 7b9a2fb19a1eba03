//! MCP server for phone number formatting and validation.
//!
//! This module provides the MCP protocol server that exposes the formatter
//! and validator to external callers through the Model Context Protocol.

pub mod handlers;

pub use handlers::PhoneMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the phone MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once
/// the peer disconnects.
///
/// # Arguments
/// * `server` - The configured PhoneMcpServer instance
pub async fn run_server(server: PhoneMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
