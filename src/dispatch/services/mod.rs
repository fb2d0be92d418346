//! Service layer for the dispatch pipeline.
//!
//! Provides [`Dispatcher`], which orchestrates the validator chain, handler
//! lookup and invocation, response construction, and the interceptor chain,
//! together with the shared structures it owns.

mod chain;
mod dispatcher;
mod guard;
mod registry;

pub use chain::{InterceptorChain, PluginChain, ValidatorChain};
pub use dispatcher::Dispatcher;
pub use registry::HandlerRegistry;
