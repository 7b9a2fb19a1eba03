//! DigitString value object and the digit extraction primitive.

use serde::{Serialize, Serializer};
use std::fmt;

/// The decimal digits of a raw phone entry, in their original order.
///
/// A `DigitString` can only be produced by [`extract_digits`], so it never
/// contains anything other than ASCII `'0'..='9'`.
///
/// # Example
///
/// ```
/// use phone_mcp_server::domain::extract_digits;
///
/// let digits = extract_digits("+234 (803) 123-4567");
/// assert_eq!(digits.as_str(), "2348031234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DigitString(String);

/// Strip every character that is not an ASCII decimal digit.
///
/// Total: any input, including the empty string, yields a (possibly empty)
/// `DigitString`. Non-ASCII digits such as `'٣'` are discarded.
pub fn extract_digits(raw: &str) -> DigitString {
    DigitString(raw.chars().filter(|c| c.is_ascii_digit()).collect())
}

impl DigitString {
    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        // ASCII only, so bytes == chars
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First digit, if any.
    pub fn leading_digit(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for DigitString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
