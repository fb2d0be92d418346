//! Observer port: structured event sink.

use crate::dispatch::domain::DispatchEvent;

/// Receives dispatch events.
///
/// Observers are called synchronously on the dispatching task and must not
/// block.
pub trait DispatchObserver: Send + Sync {
    /// Records one event.
    fn observe(&self, event: &DispatchEvent);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {
    fn observe(&self, _event: &DispatchEvent) {}
}
