//! Concurrency tests for a shared [`Dispatcher`].

use crate::pipeline::helpers::{dispatcher, labelled_handler, shouting_handler, text_message};
use courier::dispatch::{
    adapters::{handler_fn, interceptor_fn, validator_fn},
    domain::HandlerOutcome,
    services::Dispatcher,
};
use courier::message::domain::{Message, Request, Response};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_dispatches_produce_independent_responses(
    dispatcher: Arc<Dispatcher<DefaultClock>>,
) {
    dispatcher.register_handler(
        "slow",
        handler_fn(|message: Message| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(HandlerOutcome::Reply(message))
        }),
    );

    let tasks: Vec<_> = (0..64)
        .map(|index| {
            let shared = Arc::clone(&dispatcher);
            tokio::spawn(async move {
                let id = format!("msg-{index}");
                let response = shared
                    .send_message(text_message(&id, Some("slow"), &id))
                    .await;
                (id, response)
            })
        })
        .collect();

    for task in tasks {
        let (id, response) = task.await.expect("dispatch task completes");
        assert!(response.is_success());
        assert_eq!(response.original_message_id().as_str(), id);
        assert_eq!(response.response_message().content().as_text(), Some(id.as_str()));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn registration_interleaves_safely_with_dispatch(
    dispatcher: Arc<Dispatcher<DefaultClock>>,
) {
    dispatcher.register_handler("default", shouting_handler());

    let writers: Vec<_> = (0..16)
        .map(|index| {
            let shared = Arc::clone(&dispatcher);
            tokio::spawn(async move {
                shared.register_handler(format!("type-{index}"), labelled_handler("extra"));
                shared.add_validator(validator_fn("pass", |_request: Request| async { Ok(()) }));
                shared.add_interceptor(interceptor_fn("identity", |response: Response| async {
                    Ok(response)
                }));
            })
        })
        .collect();
    let readers: Vec<_> = (0..32)
        .map(|index| {
            let shared = Arc::clone(&dispatcher);
            tokio::spawn(async move {
                shared
                    .send_message(text_message(&format!("msg-{index}"), None, "hi"))
                    .await
            })
        })
        .collect();

    for writer in writers {
        writer.await.expect("writer completes");
    }
    for reader in readers {
        let response = reader.await.expect("reader completes");
        assert!(response.is_success());
        assert_eq!(response.response_message().content().as_text(), Some("HI"));
    }
    assert_eq!(dispatcher.registry().len(), 17);
    assert_eq!(dispatcher.validators().len(), 16);
    assert_eq!(dispatcher.interceptors().len(), 16);
}
