//! Domain types for the message subsystem.
//!
//! This module contains the immutable data shapes that move through the
//! dispatch pipeline. All types are serialisable via serde.

mod content;
mod envelope;
mod ids;
mod message;
mod metadata;

pub use content::MessageContent;
pub use envelope::{ErrorCode, Request, Response, ResponseError, ResponseShapeError};
pub use ids::{ConversationId, MessageId};
pub use message::{Message, MessageBuilder};
pub use metadata::{MessageMetadata, TYPE_KEY};
