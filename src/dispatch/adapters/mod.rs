//! Adapter implementations of the dispatch ports.
//!
//! - [`closures`]: wrap async closures as handlers, validators, and
//!   interceptors
//! - [`tracing_observer`]: the default observer, forwarding events to `tracing`
//! - [`memory`]: an observer that records events in memory
//! - [`health`]: the bundled health-check handler
//! - [`validators`]: the bundled structural validator

pub mod closures;
pub mod health;
pub mod memory;
pub mod tracing_observer;
pub mod validators;

pub use closures::{
    FnHandler, FnInterceptor, FnValidator, handler_fn, interceptor_fn, validator_fn,
};
pub use health::HealthCheckHandler;
pub use memory::RecordingObserver;
pub use tracing_observer::TracingObserver;
pub use validators::{StructuralLimits, StructuralValidator};
