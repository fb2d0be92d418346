//! Free-form message metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Metadata key holding the message-type routing key.
pub const TYPE_KEY: &str = "type";

/// Free-form metadata attached to a message.
///
/// Keys are strings and values are arbitrary JSON. The `type` key is
/// significant to routing; all other keys are opaque to the core.
///
/// # Examples
///
/// ```
/// use courier::message::domain::MessageMetadata;
/// use serde_json::json;
///
/// let metadata = MessageMetadata::new()
///     .with_type("greeting")
///     .with("locale", json!("en-GB"));
/// assert_eq!(metadata.type_key(), Some("greeting"));
/// assert_eq!(metadata.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageMetadata {
    entries: HashMap<String, Value>,
}

impl MessageMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Sets the message-type routing key.
    #[must_use]
    pub fn with_type(self, message_type: impl Into<String>) -> Self {
        self.with(TYPE_KEY, Value::String(message_type.into()))
    }

    /// Inserts an entry, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the string value stored under `key`.
    ///
    /// Non-string values yield `None`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Returns the message-type routing key when present as a string.
    #[must_use]
    pub fn type_key(&self) -> Option<&str> {
        self.get_str(TYPE_KEY)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for MessageMetadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
