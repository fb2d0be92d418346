//! When steps for dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use courier::message::domain::{Message, MessageContent};
use mockable::DefaultClock;
use rstest_bdd_macros::when;

fn scenario_message(key: Option<&str>) -> Message {
    let builder = Message::builder("scenario-msg", "bdd", "conv-bdd")
        .with_content(MessageContent::text("scenario payload"));
    match key {
        Some(message_type) => builder.with_type(message_type),
        None => builder,
    }
    .build(&DefaultClock)
}

#[when("a message without a type is dispatched")]
fn dispatch_untyped(world: &mut DispatchWorld) {
    let response = run_async(world.dispatcher.send_message(scenario_message(None)));
    world.last_response = Some(response);
}

#[when(r#"a message of type "{key}" is dispatched"#)]
fn dispatch_typed(world: &mut DispatchWorld, key: String) {
    let response = run_async(world.dispatcher.send_message(scenario_message(Some(&key))));
    world.last_response = Some(response);
}
