//! Routing tests for [`Dispatcher`].

use crate::pipeline::helpers::{dispatcher, labelled_handler, shouting_handler, text_message};
use courier::dispatch::services::Dispatcher;
use courier::message::domain::{ErrorCode, Request};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn typed_messages_reach_their_handler(dispatcher: Arc<Dispatcher<DefaultClock>>) {
    dispatcher.register_handler("shout", shouting_handler());
    dispatcher.register_handler("default", labelled_handler("fallback"));

    let response = dispatcher
        .send_message(text_message("msg-1", Some("shout"), "hello"))
        .await;

    assert!(response.is_success());
    assert_eq!(response.response_message().content().as_text(), Some("HELLO"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn untyped_messages_fall_back_to_default(dispatcher: Arc<Dispatcher<DefaultClock>>) {
    dispatcher.register_handler("default", labelled_handler("fallback"));

    let response = dispatcher
        .send_message(text_message("msg-1", None, "hello"))
        .await;

    assert_eq!(
        response.response_message().content().as_text(),
        Some("fallback")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn typed_message_without_handler_does_not_fall_back(
    dispatcher: Arc<Dispatcher<DefaultClock>>,
) {
    dispatcher.register_handler("default", labelled_handler("fallback"));

    let response = dispatcher
        .send_message(text_message("msg-1", Some("unknown"), "hello"))
        .await;

    assert!(!response.is_success());
    assert_eq!(response.error_code(), Some(ErrorCode::HandlerNotFound));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replacement_handler_serves_subsequent_dispatches(
    dispatcher: Arc<Dispatcher<DefaultClock>>,
) {
    dispatcher.register_handler("greeting", labelled_handler("first"));
    let before = dispatcher
        .send_message(text_message("msg-1", Some("greeting"), "hi"))
        .await;

    dispatcher.register_handler("greeting", labelled_handler("second"));
    let after = dispatcher
        .send_message(text_message("msg-2", Some("greeting"), "hi"))
        .await;

    assert_eq!(before.response_message().content().as_text(), Some("first"));
    assert_eq!(after.response_message().content().as_text(), Some("second"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn send_message_and_process_agree(dispatcher: Arc<Dispatcher<DefaultClock>>) {
    dispatcher.register_handler("shout", shouting_handler());
    for (id, key) in [("msg-1", Some("shout")), ("msg-2", None), ("msg-3", Some("nope"))] {
        let message = text_message(id, key, "hello");

        let via_send = dispatcher.send_message(message.clone()).await;
        let via_process = dispatcher.process(&Request::new(message)).await;

        assert_eq!(via_send.is_success(), via_process.is_success());
        assert_eq!(via_send.error(), via_process.error());
        assert_eq!(via_send.original_message_id(), via_process.original_message_id());
        if via_send.is_success() {
            assert_eq!(via_send, via_process);
        }
    }
}
