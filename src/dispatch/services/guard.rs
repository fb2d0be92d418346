//! Stage execution guard: panic capture and cooperative cancellation.

use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio_util::sync::CancellationToken;

/// How a guarded stage future finished.
#[derive(Debug)]
pub(crate) enum Guarded<T> {
    /// The future ran to completion.
    Completed(T),
    /// The future panicked; carries the panic message.
    Panicked(String),
    /// The cancellation token fired first.
    Cancelled,
}

/// Drives `future` to completion unless it panics or `cancel` fires.
///
/// The token is checked before the future is first polled, so an
/// already-cancelled token never starts the stage.
pub(crate) async fn guarded<F>(future: F, cancel: Option<&CancellationToken>) -> Guarded<F::Output>
where
    F: Future,
{
    let caught = AssertUnwindSafe(future).catch_unwind();
    match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => Guarded::Cancelled,
                outcome = caught => from_unwind(outcome),
            }
        }
        None => from_unwind(caught.await),
    }
}

fn from_unwind<T>(outcome: Result<T, Box<dyn Any + Send>>) -> Guarded<T> {
    match outcome {
        Ok(value) => Guarded::Completed(value),
        Err(payload) => Guarded::Panicked(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "stage panicked".to_owned())
}
