//! In-memory event recording.

use crate::dispatch::{domain::DispatchEvent, ports::DispatchObserver};
use std::sync::{Mutex, PoisonError};

/// Observer that keeps every event in memory.
///
/// # Examples
///
/// ```
/// use courier::dispatch::adapters::RecordingObserver;
/// use courier::dispatch::domain::{DispatchEvent, MessageType};
/// use courier::dispatch::ports::DispatchObserver;
///
/// let observer = RecordingObserver::new();
/// observer.observe(&DispatchEvent::HandlerReplaced {
///     message_type: MessageType::Default,
/// });
/// assert_eq!(observer.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<DispatchEvent>>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DispatchEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded events matching `predicate`.
    #[must_use]
    pub fn events_matching(&self, predicate: impl Fn(&DispatchEvent) -> bool) -> Vec<DispatchEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|event| predicate(event))
            .cloned()
            .collect()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DispatchObserver for RecordingObserver {
    fn observe(&self, event: &DispatchEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
