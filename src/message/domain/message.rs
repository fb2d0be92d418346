//! The `Message` value moving through the dispatch pipeline.
//!
//! Messages are immutable once handed to the pipeline. Handlers and
//! interceptors derive new values with the `with_*` methods instead of
//! mutating in place.

use super::{ConversationId, MessageContent, MessageId, MessageMetadata};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single message exchanged with the control plane.
///
/// # Invariants
///
/// - `id` is caller-supplied and never deduplicated by the core
/// - `timestamp` is always populated
/// - `metadata` may be absent entirely, which routes as the `default` type
///
/// # Examples
///
/// ```
/// use courier::message::domain::{Message, MessageContent, MessageMetadata};
/// use mockable::DefaultClock;
///
/// let message = Message::builder("msg-1", "web", "conv-1")
///     .with_content(MessageContent::text("hello"))
///     .with_metadata(MessageMetadata::new().with_type("greeting"))
///     .build(&DefaultClock);
///
/// assert_eq!(message.source(), "web");
/// assert_eq!(message.type_key(), Some("greeting"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Caller-supplied identifier.
    id: MessageId,

    /// Originator of the message.
    source: String,

    /// The conversation this message belongs to.
    conversation_id: ConversationId,

    /// When the message was created.
    timestamp: DateTime<Utc>,

    /// The payload.
    content: MessageContent,

    /// Optional free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<MessageMetadata>,
}

impl Message {
    /// Returns a builder for a message with the given identity.
    #[must_use]
    pub fn builder(
        id: impl Into<MessageId>,
        source: impl Into<String>,
        conversation_id: impl Into<ConversationId>,
    ) -> MessageBuilder {
        MessageBuilder::new(id, source, conversation_id)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the conversation identifier.
    #[must_use]
    pub const fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the payload.
    #[must_use]
    pub const fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Returns the metadata, if any.
    #[must_use]
    pub const fn metadata(&self) -> Option<&MessageMetadata> {
        self.metadata.as_ref()
    }

    /// Returns the `metadata["type"]` string, if present.
    #[must_use]
    pub fn type_key(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(MessageMetadata::type_key)
    }

    /// Derives a message with different content.
    #[must_use]
    pub fn with_content(mut self, content: MessageContent) -> Self {
        self.content = content;
        self
    }

    /// Derives a message with replaced metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Derives a message with one metadata entry added or replaced.
    ///
    /// Creates the metadata map when the message had none.
    #[must_use]
    pub fn with_metadata_entry(
        mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.metadata
            .get_or_insert_with(MessageMetadata::new)
            .insert(key, value);
        self
    }

    /// Derives a message belonging to another conversation.
    #[must_use]
    pub fn with_conversation_id(mut self, conversation_id: ConversationId) -> Self {
        self.conversation_id = conversation_id;
        self
    }
}

/// Builder for [`Message`] values.
#[derive(Debug)]
pub struct MessageBuilder {
    id: MessageId,
    source: String,
    conversation_id: ConversationId,
    timestamp: Option<DateTime<Utc>>,
    content: MessageContent,
    metadata: Option<MessageMetadata>,
}

impl MessageBuilder {
    /// Creates a builder with empty content and no metadata.
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        source: impl Into<String>,
        conversation_id: impl Into<ConversationId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            conversation_id: conversation_id.into(),
            timestamp: None,
            content: MessageContent::default(),
            metadata: None,
        }
    }

    /// Sets the payload.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<MessageContent>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the message-type routing key, creating metadata if needed.
    #[must_use]
    pub fn with_type(mut self, message_type: impl Into<String>) -> Self {
        let metadata = self.metadata.take().unwrap_or_default();
        self.metadata = Some(metadata.with_type(message_type));
        self
    }

    /// Pins the timestamp instead of reading it from the clock.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builds the message, stamping it with `clock` unless a timestamp was
    /// pinned.
    #[must_use]
    pub fn build(self, clock: &impl Clock) -> Message {
        Message {
            id: self.id,
            source: self.source,
            conversation_id: self.conversation_id,
            timestamp: self.timestamp.unwrap_or_else(|| clock.utc()),
            content: self.content,
            metadata: self.metadata,
        }
    }
}
