//! Port trait definitions for the dispatch pipeline.
//!
//! Ports define the plugin contracts the dispatcher drives. Adapters and
//! embedding applications implement them.

pub mod handler;
pub mod interceptor;
pub mod observer;
pub mod validator;

pub use handler::{HandlerResult, MessageHandler};
pub use interceptor::{InterceptorResult, ResponseInterceptor};
pub use observer::{DispatchObserver, NoopObserver};
pub use validator::{RequestValidator, ValidationResult};
