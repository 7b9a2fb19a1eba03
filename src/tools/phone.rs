//! Phone formatting and validation tools.
//!
//! Thin adapters between MCP tool parameters and the formatting and
//! validation core. They add no rules; they only shape responses.

use crate::domain::{extract_digits, DialingCode, DigitString};
use crate::formatting::{format, FormattedNumber};
use crate::validation::{RuleTable, ValidationRule};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Parameters for formatting a phone entry.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormatParams {
    /// Raw text as typed by the user
    pub raw: String,
}

/// Parameters for validating a phone entry.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ValidateParams {
    /// Raw text or already-extracted digits
    pub number: String,

    /// Selected dialing code, e.g. "+234"
    pub dialing_code: String,
}

/// Result of formatting.
#[derive(Debug, Clone, Serialize)]
pub struct FormatResponse {
    pub raw: String,
    pub digits: DigitString,
    pub formatted: FormattedNumber,
}

/// Where a resolved rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// The dialing code has its own entry
    Specific,

    /// The dialing code is not in the table
    Default,
}

/// Result of validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub dialing_code: DialingCode,
    pub digits: DigitString,
    pub digit_count: usize,
    pub valid: bool,
    pub rule: ValidationRule,
    pub rule_description: String,
    pub rule_source: RuleSource,
}

/// Formatting and validation in one response.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub formatted: FormattedNumber,

    #[serde(flatten)]
    pub validation: ValidateResponse,
}

/// One row of the rule listing.
#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    pub dialing_code: DialingCode,
    pub rule: ValidationRule,
    pub description: String,
}

/// All configured rules plus the fallback.
#[derive(Debug, Clone, Serialize)]
pub struct ListRulesResponse {
    pub rules: Vec<RuleEntry>,
    pub default_rule: ValidationRule,
    pub default_description: String,
}

/// Phone tools backed by a shared, immutable rule table.
#[derive(Debug, Clone)]
pub struct PhoneTools {
    rules: Arc<RuleTable>,
}

impl PhoneTools {
    /// Create new phone tools.
    ///
    /// # Arguments
    /// * `rules` - Rule table built once at startup
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn format(&self, params: &FormatParams) -> FormatResponse {
        FormatResponse {
            raw: params.raw.clone(),
            digits: extract_digits(&params.raw),
            formatted: format(&params.raw),
        }
    }

    pub fn validate(&self, params: &ValidateParams) -> ValidateResponse {
        let dialing_code = DialingCode::new(&params.dialing_code);
        let digits = extract_digits(&params.number);

        let (rule, rule_source) = match self.rules.rule_for(dialing_code.as_str()) {
            Some(rule) => (*rule, RuleSource::Specific),
            None => (*self.rules.default_rule(), RuleSource::Default),
        };
        let valid = self.rules.is_valid(&params.number, dialing_code.as_str());

        ValidateResponse {
            dialing_code,
            digit_count: digits.len(),
            digits,
            valid,
            rule,
            rule_description: rule.to_string(),
            rule_source,
        }
    }

    pub fn check(&self, params: &ValidateParams) -> CheckResponse {
        CheckResponse {
            formatted: format(&params.number),
            validation: self.validate(params),
        }
    }

    pub fn list_rules(&self) -> ListRulesResponse {
        let default_rule = *self.rules.default_rule();
        ListRulesResponse {
            rules: self
                .rules
                .rules()
                .map(|(code, rule)| RuleEntry {
                    dialing_code: code.clone(),
                    rule: *rule,
                    description: rule.to_string(),
                })
                .collect(),
            default_rule,
            default_description: default_rule.to_string(),
        }
    }
}

impl Default for PhoneTools {
    fn default() -> Self {
        Self::new(Arc::new(RuleTable::builtin()))
    }
}
