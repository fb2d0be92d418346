//! Message model for the courier control plane.
//!
//! This module defines the values exchanged with the dispatch pipeline:
//!
//! - [`domain::Message`]: an immutable message with a tagged payload
//! - [`domain::Request`]: the inbound envelope wrapping one message
//! - [`domain::Response`]: the outbound envelope, always carrying a message
//!
//! # Example
//!
//! ```
//! use courier::message::domain::{Message, MessageContent, Request};
//! use mockable::DefaultClock;
//!
//! let message = Message::builder("msg-1", "cli", "conv-1")
//!     .with_content(MessageContent::text("Hello, courier!"))
//!     .with_type("greeting")
//!     .build(&DefaultClock);
//!
//! let request = Request::new(message);
//! assert_eq!(request.message().type_key(), Some("greeting"));
//! ```

pub mod domain;

#[cfg(test)]
mod tests;
