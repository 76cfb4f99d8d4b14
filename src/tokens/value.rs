//! Token values.

use serde::Serialize;

/// A single design-token value.
///
/// Most tokens are a bare CSS string (`"10px"`, `"#2f6fed"`). Font-size
/// tokens may instead carry a size paired with a line height, which the
/// build tool expects as a two-element array.
///
/// Values pass through composition verbatim; no unit parsing or
/// normalization is applied.
///
/// # Example
///
/// ```rust
/// use underlay::TokenValue;
///
/// let radius: TokenValue = "10px".into();
/// let body: TokenValue = ["14px", "24px"].into();
///
/// assert_eq!(radius.as_str(), Some("10px"));
/// assert_eq!(body.as_pair(), Some(("14px", "24px")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A bare CSS value string.
    Value(String),
    /// A size with an explicit line height, serialized as `[size, line_height]`.
    SizeWithLineHeight(String, String),
}

impl TokenValue {
    /// Returns the bare value, or `None` for a size/line-height pair.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Value(v) => Some(v),
            TokenValue::SizeWithLineHeight(..) => None,
        }
    }

    /// Returns the size/line-height pair, or `None` for a bare value.
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match self {
            TokenValue::Value(_) => None,
            TokenValue::SizeWithLineHeight(size, line_height) => Some((size, line_height)),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Value(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Value(value)
    }
}

impl From<[&str; 2]> for TokenValue {
    fn from([size, line_height]: [&str; 2]) -> Self {
        TokenValue::SizeWithLineHeight(size.to_string(), line_height.to_string())
    }
}

impl From<(&str, &str)> for TokenValue {
    fn from((size, line_height): (&str, &str)) -> Self {
        TokenValue::SizeWithLineHeight(size.to_string(), line_height.to_string())
    }
}
