//! MCP tool handlers for the phone server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::tools::{FormatParams, PhoneTools, ValidateParams};
use crate::validation::RuleTable;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Serialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes phone formatting and validation tools.
#[derive(Clone)]
pub struct PhoneMcpServer {
    tools: PhoneTools,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for PhoneMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "phone-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Formats phone number entries for display and validates them against per-country rules keyed by dialing code.".into()),
        }
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl PhoneMcpServer {
    /// Create a new phone MCP server.
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self {
            tools: PhoneTools::new(rules),
            tool_router: Self::tool_router(),
        }
    }

    /// The tools backing the handlers.
    pub fn tools(&self) -> &PhoneTools {
        &self.tools
    }

    /// Regroup a raw phone entry for display.
    #[tool(
        description = "Format a raw phone number entry for display. Strips every non-digit character and regroups the digits as 3/3/2/2 (at most 10 digits). Does not validate."
    )]
    async fn format_phone_number(
        &self,
        params: Parameters<FormatParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!("MCP Handler: format_phone_number called");
        json_result(&self.tools.format(&params))
    }

    /// Validate a phone entry for a dialing code.
    #[tool(
        description = "Validate a phone number entry for a dialing code such as +234. Digits are extracted first. Unknown dialing codes accept 7 to 15 digits."
    )]
    async fn validate_phone_number(
        &self,
        params: Parameters<ValidateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self.tools.validate(&params);
        tracing::debug!(
            dialing_code = %response.dialing_code,
            digit_count = response.digit_count,
            valid = response.valid,
            "MCP Handler: validate_phone_number"
        );
        json_result(&response)
    }

    /// Format and validate in one call.
    #[tool(
        description = "Format a phone number entry for display and validate it for a dialing code in one call."
    )]
    async fn check_phone_number(
        &self,
        params: Parameters<ValidateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!("MCP Handler: check_phone_number called");
        json_result(&self.tools.check(&params))
    }

    /// List the dialing codes with specific rules.
    #[tool(
        description = "List the dialing codes that have specific validation rules, plus the default rule used for all other codes."
    )]
    async fn list_dialing_rules(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP Handler: list_dialing_rules called");
        json_result(&self.tools.list_rules())
    }
}
