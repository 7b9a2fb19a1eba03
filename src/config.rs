//! Configuration management for the Phone MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through dotenvy, which prints nothing.

use crate::domain::DialingCode;
use crate::error::{ConfigError, ConfigResult};
use crate::validation::{RuleTable, ValidationRule};
use once_cell::sync::Lazy;
use regex::Regex;
use std::env;

/// Environment variable holding extra per-country rules.
pub const EXTRA_RULES_VAR: &str = "PHONE_EXTRA_RULES";

/// `<code>=<min>-<max>` or `<code>=<len>` with an optional `!<digit>`.
static RULE_ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+\d{1,3})=(?:(\d+)-(\d+)|(\d+)(?:!(\d))?)$")
        .expect("Failed to compile rule entry regex")
});

/// Configuration for the Phone MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Rules added on top of the built-in table, in declaration order
    pub extra_rules: Vec<(DialingCode, ValidationRule)>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `PHONE_EXTRA_RULES`: Comma-separated extra rules, e.g.
    ///   `+233=9,+254=9!0,+49=10-11`
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let extra_rules = match env::var(EXTRA_RULES_VAR) {
            Ok(val) => Self::parse_extra_rules(&val)?,
            Err(_) => Vec::new(),
        };

        Ok(Config {
            log_level,
            extra_rules,
        })
    }

    /// Build the rule table: built-in rules plus the configured extras.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Rule` if an extra rule duplicates a code that
    /// is already covered.
    pub fn rule_table(&self) -> ConfigResult<RuleTable> {
        self.extra_rules
            .iter()
            .try_fold(RuleTable::builtin(), |table, (code, rule)| {
                table.with_rule(code.as_str(), *rule)
            })
            .map_err(ConfigError::from)
    }

    /// Parse the `PHONE_EXTRA_RULES` format.
    pub fn parse_extra_rules(value: &str) -> ConfigResult<Vec<(DialingCode, ValidationRule)>> {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Self::parse_rule_entry)
            .collect()
    }

    fn parse_rule_entry(entry: &str) -> ConfigResult<(DialingCode, ValidationRule)> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            var: EXTRA_RULES_VAR.to_string(),
            reason,
        };

        let caps = RULE_ENTRY_REGEX.captures(entry).ok_or_else(|| {
            invalid(format!(
                "Expected <+code>=<len>, <+code>=<len>!<digit> or <+code>=<min>-<max>, got: {}",
                entry
            ))
        })?;

        let number = |idx: usize| -> ConfigResult<usize> {
            let text = &caps[idx];
            text.parse::<usize>()
                .map_err(|_| invalid(format!("Length out of range in {}: {}", entry, text)))
        };

        let code = DialingCode::new(&caps[1]);
        let rule = if caps.get(2).is_some() {
            ValidationRule::range(number(2)?, number(3)?)
        } else {
            match caps.get(5) {
                Some(digit) => {
                    let digit = digit.as_str().chars().next().ok_or_else(|| {
                        invalid(format!("Missing forbidden leading digit in {}", entry))
                    })?;
                    ValidationRule::exact_not_starting_with(number(4)?, digit)
                }
                None => ValidationRule::exact(number(4)?),
            }
        };

        Ok((code, rule))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            extra_rules: Vec::new(),
        }
    }
}
