//! Declarative digit grouping.
//!
//! A policy is a list of tiers checked in ascending order of their length
//! threshold. The first tier whose threshold is at least the digit count
//! supplies the split positions. An optional digit limit is applied before
//! tier selection.

use crate::domain::DigitString;
use serde::{Serialize, Serializer};
use std::fmt;

/// A digit string regrouped with single spaces, for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FormattedNumber(String);

impl FormattedNumber {
    /// Get the formatted number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for FormattedNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One grouping tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingTier {
    /// Largest digit count this tier handles; `None` handles any length.
    pub max_len: Option<usize>,

    /// Offsets at which a space is inserted, strictly increasing.
    pub boundaries: Vec<usize>,
}

/// An ordered set of grouping tiers plus an optional digit limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingPolicy {
    tiers: Vec<GroupingTier>,
    max_digits: Option<usize>,
}

impl GroupingPolicy {
    /// Start building a policy.
    pub fn builder() -> GroupingPolicyBuilder {
        GroupingPolicyBuilder::default()
    }

    /// The 3/3/2/2 grouping for ten-digit national numbers.
    ///
    /// | digits | output |
    /// |---|---|
    /// | 0-3 | unchanged |
    /// | 4-6 | `ddd d..` |
    /// | 7-8 | `ddd ddd d..` |
    /// | 9+ | `ddd ddd dd dd`, truncated to 10 digits |
    ///
    /// Digits past the tenth are dropped. Numbering plans with longer
    /// national numbers will lose digits here.
    pub fn national_ten_digit() -> Self {
        Self::builder()
            .tier(3, &[])
            .tier(6, &[3])
            .tier(8, &[3, 6])
            .open_tier(&[3, 6, 8])
            .max_digits(10)
            .build()
    }

    /// The tiers in evaluation order.
    pub fn tiers(&self) -> &[GroupingTier] {
        &self.tiers
    }

    /// The digit limit, if any.
    pub fn max_digits(&self) -> Option<usize> {
        self.max_digits
    }

    /// Regroup a digit string.
    ///
    /// Total: if no tier matches, the last tier is used; with no tiers at
    /// all the digits are returned without separators.
    pub fn apply(&self, digits: &DigitString) -> FormattedNumber {
        let all = digits.as_str();
        let digits = match self.max_digits {
            Some(limit) if all.len() > limit => &all[..limit],
            _ => all,
        };

        let boundaries = self
            .select_tier(digits.len())
            .map(|tier| tier.boundaries.as_slice())
            .unwrap_or(&[]);

        let mut out = String::with_capacity(digits.len() + boundaries.len());
        let mut start = 0;
        for &boundary in boundaries {
            if boundary <= start || boundary >= digits.len() {
                continue;
            }
            out.push_str(&digits[start..boundary]);
            out.push(' ');
            start = boundary;
        }
        out.push_str(&digits[start..]);

        FormattedNumber(out)
    }

    fn select_tier(&self, len: usize) -> Option<&GroupingTier> {
        self.tiers
            .iter()
            .find(|tier| tier.max_len.map_or(true, |max| len <= max))
            .or_else(|| self.tiers.last())
    }
}

impl Default for GroupingPolicy {
    fn default() -> Self {
        Self::national_ten_digit()
    }
}

/// Builder for [`GroupingPolicy`]. Tiers are sorted by threshold on build,
/// with open-ended tiers last.
#[derive(Debug, Default)]
pub struct GroupingPolicyBuilder {
    tiers: Vec<GroupingTier>,
    max_digits: Option<usize>,
}

impl GroupingPolicyBuilder {
    /// Add a tier for digit counts up to `max_len`.
    pub fn tier(mut self, max_len: usize, boundaries: &[usize]) -> Self {
        self.tiers.push(GroupingTier {
            max_len: Some(max_len),
            boundaries: boundaries.to_vec(),
        });
        self
    }

    /// Add a tier for any digit count not covered by a bounded tier.
    pub fn open_tier(mut self, boundaries: &[usize]) -> Self {
        self.tiers.push(GroupingTier {
            max_len: None,
            boundaries: boundaries.to_vec(),
        });
        self
    }

    /// Drop digits beyond `limit` before grouping.
    pub fn max_digits(mut self, limit: usize) -> Self {
        self.max_digits = Some(limit);
        self
    }

    pub fn build(mut self) -> GroupingPolicy {
        self.tiers.sort_by_key(|tier| tier.max_len.unwrap_or(usize::MAX));
        for tier in &mut self.tiers {
            tier.boundaries.sort_unstable();
            tier.boundaries.dedup();
        }
        GroupingPolicy {
            tiers: self.tiers,
            max_digits: self.max_digits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extract_digits;

    fn apply(policy: &GroupingPolicy, raw: &str) -> String {
        policy.apply(&extract_digits(raw)).into_inner()
    }

    #[test]
    fn test_national_policy_thresholds() {
        let policy = GroupingPolicy::national_ten_digit();
        let cases = [
            ("", ""),
            ("123", "123"),
            ("1234", "123 4"),
            ("123456", "123 456"),
            ("1234567", "123 456 7"),
            ("12345678", "123 456 78"),
            ("123456789", "123 456 78 9"),
            ("1234567890", "123 456 78 90"),
            ("12345678901", "123 456 78 90"),
        ];
        for (input, expected) in cases {
            assert_eq!(apply(&policy, input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_builder_sorts_tiers() {
        let policy = GroupingPolicy::builder()
            .open_tier(&[2])
            .tier(2, &[])
            .build();
        assert_eq!(policy.tiers()[0].max_len, Some(2));
        assert_eq!(policy.tiers()[1].max_len, None);
        assert_eq!(apply(&policy, "12"), "12");
        assert_eq!(apply(&policy, "1234"), "12 34");
    }

    #[test]
    fn test_no_open_tier_falls_back_to_last() {
        let policy = GroupingPolicy::builder().tier(4, &[2]).build();
        assert_eq!(apply(&policy, "123456"), "12 3456");
    }

    #[test]
    fn test_empty_policy_returns_digits() {
        let policy = GroupingPolicy::builder().build();
        assert_eq!(apply(&policy, "1-2-3-4"), "1234");
    }

    #[test]
    fn test_boundaries_past_end_are_skipped() {
        let policy = GroupingPolicy::builder().open_tier(&[0, 3, 3, 10]).build();
        assert_eq!(apply(&policy, "12345"), "123 45");
    }

    #[test]
    fn test_formatted_serialization() {
        let formatted = GroupingPolicy::default().apply(&extract_digits("1234"));
        let json = serde_json::to_string(&formatted).unwrap();
        assert_eq!(json, "\"123 4\"");
    }
}
