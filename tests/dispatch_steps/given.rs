//! Given steps for dispatch BDD scenarios.

use super::world::DispatchWorld;
use courier::dispatch::{
    adapters::{handler_fn, interceptor_fn, validator_fn},
    domain::HandlerOutcome,
    error::{HandlerError, InterceptorError, ValidationError},
};
use courier::message::domain::{Message, MessageContent, Request, Response};
use rstest_bdd_macros::given;
use std::sync::{Arc, atomic::Ordering};

#[given("a dispatcher")]
fn a_dispatcher(world: &mut DispatchWorld) {
    world.reset();
}

#[given(r#"a handler "{key}" replying "{text}""#)]
fn a_replying_handler(world: &mut DispatchWorld, key: String, text: String) {
    let invocations = Arc::clone(&world.invocations);
    world.dispatcher.register_handler(
        key,
        handler_fn(move |message: Message| {
            invocations.fetch_add(1, Ordering::SeqCst);
            let reply = message.with_content(MessageContent::text(text.clone()));
            async move { Ok(HandlerOutcome::Reply(reply)) }
        }),
    );
}

#[given(r#"a silent handler "{key}""#)]
fn a_silent_handler(world: &mut DispatchWorld, key: String) {
    let invocations = Arc::clone(&world.invocations);
    world.dispatcher.register_handler(
        key,
        handler_fn(move |_message: Message| {
            invocations.fetch_add(1, Ordering::SeqCst);
            async { Ok(HandlerOutcome::NoReply) }
        }),
    );
}

#[given(r#"a handler "{key}" failing with "{reason}""#)]
fn a_failing_handler(world: &mut DispatchWorld, key: String, reason: String) {
    let invocations = Arc::clone(&world.invocations);
    world.dispatcher.register_handler(
        key,
        handler_fn(move |_message: Message| {
            invocations.fetch_add(1, Ordering::SeqCst);
            let error = HandlerError::new(reason.clone());
            async move { Err(error) }
        }),
    );
}

#[given(r#"a validator rejecting with "{reason}""#)]
fn a_rejecting_validator(world: &mut DispatchWorld, reason: String) {
    world
        .dispatcher
        .add_validator(validator_fn("scenario", move |_request: Request| {
            let error = ValidationError::new(reason.clone());
            async move { Err(error) }
        }));
}

#[given(r#"an interceptor appending "{suffix}""#)]
fn an_appending_interceptor(world: &mut DispatchWorld, suffix: String) {
    let name = format!("append{suffix}");
    world
        .dispatcher
        .add_interceptor(interceptor_fn(name, move |response: Response| {
            let tail = suffix.clone();
            async move {
                Ok(response.map_response_message(|reply| {
                    let text = format!("{}{tail}", reply.content().as_text().unwrap_or_default());
                    reply.with_content(MessageContent::text(text))
                }))
            }
        }));
}

#[given("a failing interceptor")]
fn a_failing_interceptor(world: &mut DispatchWorld) {
    world
        .dispatcher
        .add_interceptor(interceptor_fn("failing", |_response: Response| async {
            Err(InterceptorError::new("interceptor unavailable"))
        }));
}
