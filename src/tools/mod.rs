//! MCP tools for phone number entry handling.
//!
//! - **Format**: regroup a raw entry for display
//! - **Validate**: accept or reject an entry for a dialing code
//! - **Check**: both at once
//! - **List rules**: the rule table in effect

pub mod phone;

pub use phone::{
    CheckResponse, FormatParams, FormatResponse, ListRulesResponse, PhoneTools, RuleEntry,
    RuleSource, ValidateParams, ValidateResponse,
};
