//! Error types for the Phone MCP Server.
//!
//! The formatting and validation core has no error states: bad input is
//! folded into an empty string or a `false` verdict. The types here cover
//! the edges only, where the rule table is extended and where configuration
//! is loaded.

use thiserror::Error;

/// Errors that can occur when extending a rule table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The dialing code already has a rule
    #[error("Dialing code {0} already has a rule")]
    DuplicateCode(String),

    /// The dialing code is empty after trimming
    #[error("Dialing code cannot be empty")]
    EmptyCode,

    /// The rule can never be satisfied or is malformed
    #[error("Invalid rule for {code}: {reason}")]
    InvalidRule { code: String, reason: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A configured rule was rejected by the rule table
    #[error("Rule table error: {0}")]
    Rule(#[from] RuleError),
}

/// Convenience type alias for Results with RuleError
pub type RuleResult<T> = Result<T, RuleError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
