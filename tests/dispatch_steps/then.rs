//! Then steps for dispatch BDD scenarios.

use super::world::DispatchWorld;
use courier::dispatch::domain::system::STATUS_KEY;
use rstest_bdd_macros::then;

#[then("the dispatch succeeds")]
fn dispatch_succeeds(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let response = world.response()?;
    if !response.is_success() {
        return Err(eyre::eyre!("expected success, got {:?}", response.error()));
    }
    Ok(())
}

#[then(r#"the dispatch fails with "{code}""#)]
fn dispatch_fails_with(world: &DispatchWorld, code: String) -> Result<(), eyre::Report> {
    let response = world.response()?;
    let actual = response
        .error_code()
        .ok_or_else(|| eyre::eyre!("expected failure {code}, but dispatch succeeded"))?;
    if actual.as_str() != code {
        return Err(eyre::eyre!("expected error code {code}, got {actual}"));
    }
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message_is(world: &DispatchWorld, message: String) -> Result<(), eyre::Report> {
    let response = world.response()?;
    let error = response
        .error()
        .ok_or_else(|| eyre::eyre!("response carries no error"))?;
    if error.message != message {
        return Err(eyre::eyre!(
            "expected error message '{message}', got '{}'",
            error.message
        ));
    }
    Ok(())
}

#[then(r#"the reply text is "{text}""#)]
fn reply_text_is(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let response = world.response()?;
    let actual = response.response_message().content().as_text();
    if actual != Some(text.as_str()) {
        return Err(eyre::eyre!("expected reply text '{text}', got {actual:?}"));
    }
    Ok(())
}

#[then(r#"the reply comes from "{source}" with status "{status}""#)]
fn reply_from_with_status(
    world: &DispatchWorld,
    source: String,
    status: String,
) -> Result<(), eyre::Report> {
    let reply = world.response()?.response_message();
    if reply.source() != source {
        return Err(eyre::eyre!(
            "expected reply source '{source}', got '{}'",
            reply.source()
        ));
    }
    let actual = reply.metadata().and_then(|metadata| metadata.get_str(STATUS_KEY));
    if actual != Some(status.as_str()) {
        return Err(eyre::eyre!("expected status '{status}', got {actual:?}"));
    }
    Ok(())
}

#[then("no handler was invoked")]
fn no_handler_invoked(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let count = world.invocation_count();
    if count != 0 {
        return Err(eyre::eyre!("expected no handler invocations, got {count}"));
    }
    Ok(())
}
