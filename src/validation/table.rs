//! Dialing code to rule lookup table.

use super::rules::ValidationRule;
use crate::domain::{extract_digits, DialingCode};
use crate::error::{RuleError, RuleResult};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Nigeria.
pub const NIGERIA: &str = "+234";
/// United States and Canada (NANP).
pub const US_CANADA: &str = "+1";
/// United Kingdom.
pub const UNITED_KINGDOM: &str = "+44";
/// India.
pub const INDIA: &str = "+91";

/// Rule applied to any dialing code without a specific entry.
pub const DEFAULT_RULE: ValidationRule = ValidationRule::range(7, 15);

/// The built-in table, initialised on first use and never mutated.
pub static BUILTIN_RULES: Lazy<RuleTable> = Lazy::new(RuleTable::builtin);

/// Maps dialing codes to validation rules.
///
/// Lookup is exact-match on the trimmed code; there is no prefix or fuzzy
/// matching. Every code resolves to exactly one rule: its own entry, or the
/// default range rule.
///
/// # Example
///
/// ```
/// use phone_mcp_server::validation::{RuleTable, ValidationRule};
///
/// let table = RuleTable::builtin()
///     .with_rule("+233", ValidationRule::exact(9))
///     .unwrap();
/// assert!(table.is_valid("24 123 4567", "+233"));
/// assert!(table.is_valid("8031234567", "+234"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<DialingCode, ValidationRule>,
    default_rule: ValidationRule,
}

impl RuleTable {
    /// A table with no specific rules; everything falls to the default.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
            default_rule: DEFAULT_RULE,
        }
    }

    /// The built-in country rules.
    pub fn builtin() -> Self {
        let rules = [
            (NIGERIA, ValidationRule::exact_not_starting_with(10, '0')),
            (US_CANADA, ValidationRule::exact(10)),
            (UNITED_KINGDOM, ValidationRule::range(10, 11)),
            (INDIA, ValidationRule::exact(10)),
        ]
        .into_iter()
        .map(|(code, rule)| (DialingCode::new(code), rule))
        .collect();

        Self {
            rules,
            default_rule: DEFAULT_RULE,
        }
    }

    /// Add a rule for a code that has none yet.
    ///
    /// # Errors
    ///
    /// - `RuleError::EmptyCode` if the code is blank
    /// - `RuleError::DuplicateCode` if the code already has a rule
    /// - `RuleError::InvalidRule` if no digit string could satisfy the rule
    pub fn with_rule(mut self, code: &str, rule: ValidationRule) -> RuleResult<Self> {
        let code = DialingCode::new(code);
        if code.as_str().is_empty() {
            return Err(RuleError::EmptyCode);
        }
        if self.rules.contains_key(&code) {
            return Err(RuleError::DuplicateCode(code.into_inner()));
        }
        rule.check(code.as_str())?;

        tracing::debug!(dialing_code = %code, rule = %rule, "Adding validation rule");
        self.rules.insert(code, rule);
        Ok(self)
    }

    /// Resolve the rule for a dialing code. Never absent.
    pub fn resolve(&self, code: &str) -> &ValidationRule {
        self.rule_for(code).unwrap_or(&self.default_rule)
    }

    /// The specific rule for a code, if it has one.
    pub fn rule_for(&self, code: &str) -> Option<&ValidationRule> {
        self.rules.get(code.trim())
    }

    /// Extract digits from `raw` and check them against the rule for `code`.
    pub fn is_valid(&self, raw: &str, code: &str) -> bool {
        let digits = extract_digits(raw);
        let rule = self.resolve(code);
        let valid = rule.is_satisfied_by(&digits);

        tracing::trace!(
            dialing_code = %code.trim(),
            digit_count = digits.len(),
            valid,
            "validated phone entry"
        );

        valid
    }

    /// Specific rules, sorted by dialing code.
    pub fn rules(&self) -> impl Iterator<Item = (&DialingCode, &ValidationRule)> {
        self.rules.iter()
    }

    pub fn default_rule(&self) -> &ValidationRule {
        &self.default_rule
    }

    /// Number of specific rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
