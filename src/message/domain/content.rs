//! Message payload representation.
//!
//! Payloads are a tagged variant rather than an untyped blob so handlers can
//! match on the shape they expect.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The payload carried by a message.
///
/// # Serialisation
///
/// Content is serialised with a `kind` tag and a `value` field:
///
/// ```json
/// { "kind": "text", "value": "Hello" }
/// { "kind": "structured", "value": { "status": "ok" } }
/// { "kind": "binary", "value": [104, 105] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MessageContent {
    /// Plain text.
    Text(String),
    /// A structured JSON value.
    Structured(Value),
    /// Raw bytes.
    Binary(Vec<u8>),
}

impl MessageContent {
    /// Creates text content.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier::message::domain::MessageContent;
    ///
    /// let content = MessageContent::text("ping");
    /// assert_eq!(content.as_text(), Some("ping"));
    /// ```
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates structured content.
    #[must_use]
    pub const fn structured(value: Value) -> Self {
        Self::Structured(value)
    }

    /// Creates binary content.
    #[must_use]
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Binary(bytes.into())
    }

    /// Returns the text when this is text content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) | Self::Binary(_) => None,
        }
    }

    /// Returns the JSON value when this is structured content.
    #[must_use]
    pub const fn as_structured(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Text(_) | Self::Binary(_) => None,
        }
    }

    /// Returns the bytes when this is binary content.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            Self::Text(_) | Self::Structured(_) => None,
        }
    }

    /// Returns `true` for blank text, JSON `null`, or zero bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Structured(value) => value.is_null(),
            Self::Binary(bytes) => bytes.is_empty(),
        }
    }
}

impl Default for MessageContent {
    fn default() -> Self {
        Self::Structured(Value::Null)
    }
}

impl From<&str> for MessageContent {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for MessageContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Value> for MessageContent {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}
