//! Bundled liveness handler.

use crate::dispatch::{
    domain::{
        HandlerOutcome, MessageType,
        system::ORIGINAL_MESSAGE_ID_KEY,
    },
    ports::{HandlerResult, MessageHandler},
};
use crate::message::domain::{Message, MessageContent, MessageId, MessageMetadata};
use async_trait::async_trait;
use chrono::SecondsFormat;
use mockable::Clock;
use serde_json::{Value, json};
use std::sync::Arc;

/// Source of health-check replies.
pub const HEALTH_CHECK_SOURCE: &str = "health_check";

const DEFAULT_STATUS_MESSAGE: &str = "Message control plane is running";

/// Replies to `health_check` messages with a liveness payload.
///
/// The reply carries structured content of the form
/// `{"status": "ok", "timestamp": <RFC 3339>, "message": <text>}`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use courier::dispatch::adapters::HealthCheckHandler;
/// use courier::dispatch::domain::MessageType;
/// use courier::dispatch::services::Dispatcher;
/// use mockable::DefaultClock;
///
/// let clock = Arc::new(DefaultClock);
/// let dispatcher = Dispatcher::new(Arc::clone(&clock));
/// dispatcher.register_handler(
///     HealthCheckHandler::<DefaultClock>::message_type(),
///     Arc::new(HealthCheckHandler::new(clock)),
/// );
/// assert!(dispatcher.registry().contains(&MessageType::HealthCheck));
/// ```
#[derive(Debug)]
pub struct HealthCheckHandler<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    status_message: String,
}

impl<C> HealthCheckHandler<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a handler reporting the default status text.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            status_message: DEFAULT_STATUS_MESSAGE.to_owned(),
        }
    }

    /// Replaces the human-readable status text.
    #[must_use]
    pub fn with_status_message(mut self, status_message: impl Into<String>) -> Self {
        self.status_message = status_message.into();
        self
    }

    /// The routing key this handler serves.
    #[must_use]
    pub const fn message_type() -> MessageType {
        MessageType::HealthCheck
    }
}

#[async_trait]
impl<C> MessageHandler for HealthCheckHandler<C>
where
    C: Clock + Send + Sync,
{
    async fn handle(&self, message: &Message) -> HandlerResult {
        let now = self.clock.utc();
        let payload = json!({
            "status": "ok",
            "timestamp": now.to_rfc3339_opts(SecondsFormat::Secs, true),
            "message": self.status_message,
        });
        let reply = Message::builder(
            MessageId::generate(),
            HEALTH_CHECK_SOURCE,
            message.conversation_id().or_generate(),
        )
        .with_content(MessageContent::structured(payload))
        .with_metadata(MessageMetadata::new().with(
            ORIGINAL_MESSAGE_ID_KEY,
            Value::String(message.id().to_string()),
        ))
        .with_timestamp(now)
        .build(&*self.clock);
        Ok(HandlerOutcome::Reply(reply))
    }
}
