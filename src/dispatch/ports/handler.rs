//! Handler port: business logic for one message type.

use crate::dispatch::{domain::HandlerOutcome, error::HandlerError};
use crate::message::domain::Message;
use async_trait::async_trait;

/// Result type for handler invocations.
pub type HandlerResult = Result<HandlerOutcome, HandlerError>;

/// Processes messages routed to one message-type key.
///
/// Handlers may suspend (perform I/O, call external services). The
/// dispatcher awaits them to completion before building the response.
///
/// # Implementation Notes
///
/// - Return [`HandlerOutcome::NoReply`] when there is nothing to send back;
///   the dispatcher synthesises an acknowledgement.
/// - Failures become `HANDLER_ERROR` responses whose message is the error's
///   `Display` output.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handles one inbound message.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the message cannot be processed.
    async fn handle(&self, message: &Message) -> HandlerResult;
}
