//! Shared fixtures for dispatch unit tests.

use crate::dispatch::{
    adapters::{RecordingObserver, handler_fn},
    domain::{DispatcherConfig, HandlerOutcome},
    error::HandlerError,
    ports::{DispatchObserver, HandlerResult, MessageHandler},
    services::Dispatcher,
};
use crate::message::domain::{Message, MessageContent, Request};
use async_trait::async_trait;
use mockable::DefaultClock;
use mockall::mock;
use rstest::fixture;
use std::sync::Arc;

mock! {
    pub SpyHandler {}

    #[async_trait]
    impl MessageHandler for SpyHandler {
        async fn handle(&self, message: &Message) -> HandlerResult;
    }
}

/// A dispatcher wired to an in-memory observer.
pub struct Harness {
    pub dispatcher: Dispatcher<DefaultClock>,
    pub observer: Arc<RecordingObserver>,
}

impl Harness {
    pub fn with_config(config: DispatcherConfig) -> Self {
        let observer = Arc::new(RecordingObserver::new());
        let sink: Arc<dyn DispatchObserver> = Arc::<RecordingObserver>::clone(&observer);
        let dispatcher = Dispatcher::new(Arc::new(DefaultClock))
            .with_observer(sink)
            .with_config(config);
        Self {
            dispatcher,
            observer,
        }
    }
}

#[fixture]
pub fn harness() -> Harness {
    Harness::with_config(DispatcherConfig::default())
}

/// Builds a text message, optionally typed.
pub fn message(id: &str, message_type: Option<&str>) -> Message {
    let builder = Message::builder(id, "test-source", "conv-1")
        .with_content(MessageContent::text(format!("payload of {id}")));
    match message_type {
        Some(key) => builder.with_type(key),
        None => builder,
    }
    .build(&DefaultClock)
}

pub fn request(id: &str, message_type: Option<&str>) -> Request {
    Request::new(message(id, message_type))
}

/// A handler echoing the inbound message back.
pub fn echo_handler() -> Arc<dyn MessageHandler> {
    handler_fn(|message: Message| async move { Ok(HandlerOutcome::Reply(message)) })
}

/// A handler replying with fixed text from `source`.
pub fn replying_handler(source: &'static str, text: &'static str) -> Arc<dyn MessageHandler> {
    handler_fn(move |message: Message| async move {
        Ok(HandlerOutcome::Reply(
            Message::builder(format!("{}-reply", message.id()), source, "conv-1")
                .with_content(MessageContent::text(text))
                .build(&DefaultClock),
        ))
    })
}

pub fn silent_handler() -> Arc<dyn MessageHandler> {
    handler_fn(|_message: Message| async { Ok(HandlerOutcome::NoReply) })
}

pub fn failing_handler(reason: &'static str) -> Arc<dyn MessageHandler> {
    handler_fn(move |_message: Message| async move { Err(HandlerError::new(reason)) })
}
