//! Display formatting for phone number entries.
//!
//! The formatter discards everything that is not a digit and regroups the
//! remaining digits with single spaces according to a [`GroupingPolicy`].
//! It never fails; the output is for display and says nothing about
//! whether the number is valid.

pub mod grouping;

pub use grouping::{FormattedNumber, GroupingPolicy, GroupingTier};

use crate::domain::extract_digits;
use once_cell::sync::Lazy;

static NATIONAL_TEN_DIGIT: Lazy<GroupingPolicy> = Lazy::new(GroupingPolicy::national_ten_digit);

/// Format a raw entry with the default 3/3/2/2 national grouping.
///
/// # Example
///
/// ```
/// use phone_mcp_server::formatting::format;
///
/// assert_eq!(format("0803 123 4567").as_str(), "080 312 34 56");
/// assert_eq!(format("abc12def3456").as_str(), "123 456");
/// ```
pub fn format(raw: &str) -> FormattedNumber {
    format_with(raw, &NATIONAL_TEN_DIGIT)
}

/// Format a raw entry with an explicit grouping policy.
pub fn format_with(raw: &str, policy: &GroupingPolicy) -> FormattedNumber {
    let digits = extract_digits(raw);
    tracing::trace!(digit_count = digits.len(), "formatting phone entry");
    policy.apply(&digits)
}
