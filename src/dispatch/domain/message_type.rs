//! Message-type routing keys.

use crate::message::domain::Message;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key used when a message carries no usable `metadata["type"]`.
pub const DEFAULT_TYPE_KEY: &str = "default";

/// Key of the bundled health-check handler.
pub const HEALTH_CHECK_TYPE_KEY: &str = "health_check";

/// The message-type key used to select a handler.
///
/// Known kinds get their own variant; every other key is carried verbatim in
/// [`MessageType::Custom`]. Conversion from and to strings is exact and
/// case-sensitive, so `from_key(k).as_str() == k` for every `k`.
///
/// # Examples
///
/// ```
/// use courier::dispatch::domain::MessageType;
///
/// assert_eq!(MessageType::from_key("default"), MessageType::Default);
/// assert_eq!(MessageType::from_key("Default").as_str(), "Default");
/// assert!(MessageType::from_key("order.created").is_custom());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    /// The fallback kind, keyed `default`.
    Default,
    /// Liveness probes, keyed `health_check`.
    HealthCheck,
    /// Any other key.
    Custom(CustomMessageType),
}

/// A message-type key that is not one of the known kinds.
///
/// Only constructible through [`MessageType::from_key`], which guarantees it
/// never shadows a known key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomMessageType(String);

impl CustomMessageType {
    /// Returns the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl MessageType {
    /// Resolves a key string to a message type.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            DEFAULT_TYPE_KEY => Self::Default,
            HEALTH_CHECK_TYPE_KEY => Self::HealthCheck,
            other => Self::Custom(CustomMessageType(other.to_owned())),
        }
    }

    /// Resolves the routing key of a message.
    ///
    /// Reads `metadata["type"]`; a missing metadata map, a missing key, or a
    /// non-string value all resolve to [`MessageType::Default`].
    #[must_use]
    pub fn of(message: &Message) -> Self {
        message
            .type_key()
            .map_or(Self::Default, Self::from_key)
    }

    /// Returns the key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => DEFAULT_TYPE_KEY,
            Self::HealthCheck => HEALTH_CHECK_TYPE_KEY,
            Self::Custom(custom) => custom.as_str(),
        }
    }

    /// Returns `true` for keys outside the known kinds.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<&str> for MessageType {
    fn from(value: &str) -> Self {
        Self::from_key(value)
    }
}

impl From<String> for MessageType {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl From<MessageType> for String {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Custom(CustomMessageType(key)) => key,
            known @ (MessageType::Default | MessageType::HealthCheck) => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
