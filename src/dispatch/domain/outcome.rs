//! Handler outcomes.

use crate::message::domain::Message;

/// What a handler produced for an inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    /// A reply message to send back.
    Reply(Message),
    /// The message was processed and there is nothing to send back.
    NoReply,
}

impl HandlerOutcome {
    /// Returns `true` for [`HandlerOutcome::NoReply`].
    #[must_use]
    pub const fn is_no_reply(&self) -> bool {
        matches!(self, Self::NoReply)
    }
}

impl From<Message> for HandlerOutcome {
    fn from(message: Message) -> Self {
        Self::Reply(message)
    }
}

impl From<Option<Message>> for HandlerOutcome {
    fn from(message: Option<Message>) -> Self {
        message.map_or(Self::NoReply, Self::Reply)
    }
}
