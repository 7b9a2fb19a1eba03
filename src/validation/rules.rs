//! Validation rules over digit strings.

use crate::domain::DigitString;
use crate::error::{RuleError, RuleResult};
use serde::Serialize;
use std::fmt;

/// A predicate over a [`DigitString`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Exactly `length` digits, optionally not starting with a given digit.
    ExactLength {
        length: usize,
        forbidden_leading_digit: Option<char>,
    },

    /// Between `min` and `max` digits, inclusive.
    LengthRange { min: usize, max: usize },
}

impl ValidationRule {
    pub const fn exact(length: usize) -> Self {
        Self::ExactLength {
            length,
            forbidden_leading_digit: None,
        }
    }

    pub const fn exact_not_starting_with(length: usize, digit: char) -> Self {
        Self::ExactLength {
            length,
            forbidden_leading_digit: Some(digit),
        }
    }

    pub const fn range(min: usize, max: usize) -> Self {
        Self::LengthRange { min, max }
    }

    /// Whether `digits` satisfies this rule.
    pub fn is_satisfied_by(&self, digits: &DigitString) -> bool {
        match *self {
            Self::ExactLength {
                length,
                forbidden_leading_digit,
            } => {
                digits.len() == length
                    && match forbidden_leading_digit {
                        Some(forbidden) => digits.leading_digit() != Some(forbidden),
                        None => true,
                    }
            }
            Self::LengthRange { min, max } => (min..=max).contains(&digits.len()),
        }
    }

    /// Reject rules that no digit string could satisfy.
    pub(crate) fn check(&self, code: &str) -> RuleResult<()> {
        let invalid = |reason: &str| -> RuleResult<()> {
            Err(RuleError::InvalidRule {
                code: code.to_string(),
                reason: reason.to_string(),
            })
        };

        match *self {
            Self::ExactLength { length: 0, .. } => invalid("length must be at least 1"),
            Self::ExactLength {
                forbidden_leading_digit: Some(digit),
                ..
            } if !digit.is_ascii_digit() => invalid("forbidden leading character must be a digit"),
            Self::LengthRange { max: 0, .. } => invalid("maximum length must be at least 1"),
            Self::LengthRange { min, max } if min > max => {
                invalid("minimum length exceeds maximum length")
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactLength {
                length,
                forbidden_leading_digit: None,
            } => write!(f, "exactly {} digits", length),
            Self::ExactLength {
                length,
                forbidden_leading_digit: Some(digit),
            } => write!(f, "exactly {} digits, not starting with {}", length, digit),
            Self::LengthRange { min, max } => write!(f, "{} to {} digits", min, max),
        }
    }
}
