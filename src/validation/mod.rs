//! Phone number validation by dialing code.
//!
//! Validation always extracts digits first, then checks them against the
//! rule resolved for the dialing code. Unknown codes are not rejected; they
//! fall through to a permissive 7-15 digit range.

pub mod rules;
pub mod table;

pub use rules::ValidationRule;
pub use table::{
    RuleTable, BUILTIN_RULES, DEFAULT_RULE, INDIA, NIGERIA, UNITED_KINGDOM, US_CANADA,
};

/// Validate a raw or pre-extracted entry against the built-in rules.
///
/// # Example
///
/// ```
/// use phone_mcp_server::validation::is_valid;
///
/// assert!(is_valid("8031234567", "+234"));
/// assert!(!is_valid("0803123456", "+234"));
/// assert!(is_valid("1234567", "+999"));
/// ```
pub fn is_valid(raw_or_digits: &str, dialing_code: &str) -> bool {
    BUILTIN_RULES.is_valid(raw_or_digits, dialing_code)
}
