//! Ordered, append-only plugin chains.

use crate::dispatch::ports::{RequestValidator, ResponseInterceptor};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Ordered sequence of validators.
pub type ValidatorChain = PluginChain<dyn RequestValidator>;

/// Ordered sequence of interceptors.
pub type InterceptorChain = PluginChain<dyn ResponseInterceptor>;

/// An append-only, insertion-ordered sequence of plugins.
///
/// Appends swap in a new immutable snapshot; readers clone the current
/// snapshot and iterate it without holding the lock. A dispatch that is
/// already running keeps iterating the snapshot it took, and no reader ever
/// sees a partially appended sequence.
pub struct PluginChain<T: ?Sized> {
    entries: RwLock<Arc<[Arc<T>]>>,
}

impl<T: ?Sized> PluginChain<T> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Appends a plugin at the end of the chain.
    ///
    /// No deduplication is performed; adding the same plugin twice runs it
    /// twice.
    pub fn push(&self, plugin: Arc<T>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut next: Vec<Arc<T>> = entries.iter().cloned().collect();
        next.push(plugin);
        *entries = Arc::from(next);
    }

    /// Returns the current sequence in execution order.
    #[must_use]
    pub fn snapshot(&self) -> Arc<[Arc<T>]> {
        Arc::clone(&self.entries.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the number of plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns `true` if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl<T: ?Sized> Default for PluginChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for PluginChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginChain")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
