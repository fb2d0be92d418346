//! Shared world state for dispatch BDD scenarios.

use courier::dispatch::{ports::NoopObserver, services::Dispatcher};
use courier::message::domain::Response;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Scenario world for dispatch behaviour tests.
pub struct DispatchWorld {
    /// The dispatcher under test.
    pub dispatcher: Dispatcher<DefaultClock>,
    /// Number of handler invocations across the scenario.
    pub invocations: Arc<AtomicUsize>,
    /// Response to the last dispatched message.
    pub last_response: Option<Response>,
}

impl DispatchWorld {
    /// Creates a world with a fresh dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dispatcher: fresh_dispatcher(),
            invocations: Arc::new(AtomicUsize::new(0)),
            last_response: None,
        }
    }

    /// Discards all registrations and recorded state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns how many times any scenario handler ran.
    #[must_use]
    pub fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    /// Returns the last response or an error when nothing was dispatched.
    pub fn response(&self) -> Result<&Response, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no message has been dispatched in this scenario"))
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_dispatcher() -> Dispatcher<DefaultClock> {
    Dispatcher::new(Arc::new(DefaultClock)).with_observer(Arc::new(NoopObserver))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
