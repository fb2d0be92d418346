//! Messages synthesised by the dispatcher itself.

use crate::message::domain::{
    ErrorCode, Message, MessageContent, MessageId, MessageMetadata,
};
use mockable::Clock;
use serde_json::Value;

/// Source of every message the dispatcher synthesises.
pub const SYSTEM_SOURCE: &str = "mcp_system";

/// Metadata key linking a system message to the inbound message.
pub const ORIGINAL_MESSAGE_ID_KEY: &str = "originalMessageId";

/// Metadata key holding the processing status.
pub const STATUS_KEY: &str = "status";

/// Metadata key holding the failure code on error messages.
pub const ERROR_CODE_KEY: &str = "errorCode";

/// Metadata key holding the number of swallowed interceptor faults.
pub const INTERCEPTOR_FAULTS_KEY: &str = "interceptorFaults";

/// Status recorded when a handler processed a message without replying.
pub const STATUS_PROCESSED_NO_REPLY: &str = "PROCESSED_NO_REPLY";

/// Status recorded on failure messages.
pub const STATUS_ERROR: &str = "ERROR";

/// Builds the message returned when a handler produced no reply.
#[must_use]
pub fn no_reply_message(inbound: &Message, clock: &impl Clock) -> Message {
    let metadata = MessageMetadata::new()
        .with(
            ORIGINAL_MESSAGE_ID_KEY,
            Value::String(inbound.id().to_string()),
        )
        .with(STATUS_KEY, Value::from(STATUS_PROCESSED_NO_REPLY));
    Message::builder(
        MessageId::generate(),
        SYSTEM_SOURCE,
        inbound.conversation_id().or_generate(),
    )
    .with_content(MessageContent::text(format!(
        "Message {} was processed without a direct reply.",
        inbound.id()
    )))
    .with_metadata(metadata)
    .build(clock)
}

/// Builds the message describing a dispatch failure.
#[must_use]
pub fn error_message(
    inbound: &Message,
    code: ErrorCode,
    description: &str,
    clock: &impl Clock,
) -> Message {
    let metadata = MessageMetadata::new()
        .with(
            ORIGINAL_MESSAGE_ID_KEY,
            Value::String(inbound.id().to_string()),
        )
        .with(STATUS_KEY, Value::from(STATUS_ERROR))
        .with(ERROR_CODE_KEY, Value::from(code.as_str()));
    Message::builder(
        MessageId::generate(),
        SYSTEM_SOURCE,
        inbound.conversation_id().or_generate(),
    )
    .with_content(MessageContent::text(description))
    .with_metadata(metadata)
    .build(clock)
}
