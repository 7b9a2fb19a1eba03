//! DialingCode value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An international calling prefix such as `"+234"`, used as an opaque
/// lookup key into the rule table.
///
/// Trimming surrounding whitespace is the only normalization applied, so
/// `" +234 "` and `"+234\t"` resolve like `"+234"`. The code is not parsed
/// or checked for well-formedness; `"+1"` and `"1"` are different keys.
///
/// # Example
///
/// ```
/// use phone_mcp_server::domain::DialingCode;
///
/// let code = DialingCode::new(" +44 ");
/// assert_eq!(code.as_str(), "+44");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialingCode(String);

impl DialingCode {
    /// Create a new DialingCode.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for DialingCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::borrow::Borrow<str> for DialingCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for DialingCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DialingCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DialingCode::new(s))
    }
}

impl fmt::Display for DialingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
