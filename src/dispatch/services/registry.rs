//! Handler registry keyed by message type.

use crate::dispatch::{
    adapters::TracingObserver,
    domain::{DispatchEvent, MessageType},
    ports::{DispatchObserver, MessageHandler},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe mapping from message type to handler.
///
/// At most one handler is stored per key; registering again replaces the
/// previous handler (last write wins) and reports
/// [`DispatchEvent::HandlerReplaced`] to the registry's observer. Lookups
/// clone the handler out of the lock so no lock is held while a handler runs.
pub struct HandlerRegistry {
    handlers: RwLock<HashMap<MessageType, Arc<dyn MessageHandler>>>,
    observer: Arc<dyn DispatchObserver>,
}

impl HandlerRegistry {
    /// Creates an empty registry that reports through [`TracingObserver`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver::new()))
    }

    /// Creates an empty registry reporting replacements to `observer`.
    #[must_use]
    pub fn with_observer(observer: Arc<dyn DispatchObserver>) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            observer,
        }
    }

    pub(crate) fn set_observer(&mut self, observer: Arc<dyn DispatchObserver>) {
        self.observer = observer;
    }

    /// Stores `handler` under `message_type`.
    ///
    /// Returns the handler that was replaced, if any. A replacement is
    /// reported as [`DispatchEvent::HandlerReplaced`].
    pub fn register(
        &self,
        message_type: MessageType,
        handler: Arc<dyn MessageHandler>,
    ) -> Option<Arc<dyn MessageHandler>> {
        let previous = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(message_type.clone(), handler);
        if previous.is_some() {
            self.observer
                .observe(&DispatchEvent::HandlerReplaced { message_type });
        }
        previous
    }

    /// Returns the handler registered for exactly `message_type`.
    #[must_use]
    pub fn lookup(&self, message_type: &MessageType) -> Option<Arc<dyn MessageHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(message_type)
            .cloned()
    }

    /// Returns `true` if a handler is registered for `message_type`.
    #[must_use]
    pub fn contains(&self, message_type: &MessageType) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(message_type)
    }

    /// Returns the registered message types in key order.
    #[must_use]
    pub fn registered_types(&self) -> Vec<MessageType> {
        let mut types: Vec<MessageType> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        types.sort();
        types
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("types", &self.registered_types())
            .finish_non_exhaustive()
    }
}
