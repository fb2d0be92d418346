//! Interceptor tests for [`Dispatcher`].

use crate::pipeline::helpers::{dispatcher, shouting_handler, text_message};
use courier::dispatch::{
    adapters::interceptor_fn,
    domain::{DispatcherConfig, system::INTERCEPTOR_FAULTS_KEY},
    error::InterceptorError,
    ports::ResponseInterceptor,
    services::Dispatcher,
};
use courier::message::domain::{MessageContent, Response};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

fn suffixing(suffix: &'static str) -> Arc<dyn ResponseInterceptor> {
    interceptor_fn(suffix, move |response: Response| async move {
        Ok(response.map_response_message(|reply| {
            let text = format!("{}{suffix}", reply.content().as_text().unwrap_or_default());
            reply.with_content(MessageContent::text(text))
        }))
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn interceptors_apply_in_order(dispatcher: Arc<Dispatcher<DefaultClock>>) {
    dispatcher.register_handler("shout", shouting_handler());
    dispatcher.add_interceptor(suffixing("-a"));
    dispatcher.add_interceptor(suffixing("-b"));

    let response = dispatcher
        .send_message(text_message("msg-1", Some("shout"), "hi"))
        .await;

    assert_eq!(response.response_message().content().as_text(), Some("HI-a-b"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn faulty_interceptor_is_skipped(dispatcher: Arc<Dispatcher<DefaultClock>>) {
    dispatcher.register_handler("shout", shouting_handler());
    dispatcher.add_interceptor(suffixing("-a"));
    dispatcher.add_interceptor(interceptor_fn("broken", |_response: Response| async {
        Err(InterceptorError::new("enrichment service down"))
    }));

    let response = dispatcher
        .send_message(text_message("msg-1", Some("shout"), "hi"))
        .await;

    assert!(response.is_success());
    assert!(response.error().is_none());
    assert_eq!(response.response_message().content().as_text(), Some("HI-a"));
}

#[tokio::test(flavor = "multi_thread")]
async fn configured_dispatcher_reports_faults_on_every_outcome() {
    let config = DispatcherConfig::from_json_str(
        r#"{"interceptor_scope": "all_outcomes", "report_interceptor_faults": true}"#,
    )
    .expect("valid config");
    let dispatcher = Dispatcher::new(Arc::new(DefaultClock)).with_config(config);
    dispatcher.add_interceptor(interceptor_fn("broken", |_response: Response| async {
        Err(InterceptorError::new("enrichment service down"))
    }));

    let response = dispatcher
        .send_message(text_message("msg-1", Some("missing"), "hi"))
        .await;

    assert!(!response.is_success());
    let metadata = response.response_message().metadata().expect("metadata");
    assert_eq!(metadata.get(INTERCEPTOR_FAULTS_KEY), Some(&json!(1)));
}
