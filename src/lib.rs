//! Phone MCP Server - phone number formatting and validation with a Model Context Protocol front end.
//!
//! The core is two pure, synchronous operations over user-typed phone entries:
//! [`format`] regroups the digits of a raw entry for display, and [`is_valid`]
//! checks the digits against a per-country rule keyed by dialing code.
//! Neither operation fails; bad input yields an empty string or `false`.
//!
//! # Architecture
//!
//! - **domain**: Digit extraction and the dialing code key
//! - **formatting**: Declarative digit grouping
//! - **validation**: Validation rules and the dialing code rule table
//! - **error**: Error types for rule table extension and configuration
//! - **config**: Configuration management from environment variables
//! - **tools**: MCP tool adapters over the core
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod formatting;
pub mod server;
pub mod tools;
pub mod validation;

pub use config::Config;
pub use domain::{extract_digits, DialingCode, DigitString};
pub use error::{ConfigError, RuleError};
pub use formatting::{format, format_with, FormattedNumber, GroupingPolicy};
pub use server::PhoneMcpServer;
pub use tools::PhoneTools;
pub use validation::{is_valid, RuleTable, ValidationRule};
