//! Domain types for the dispatch pipeline.
//!
//! Routing keys, handler outcomes, pipeline stages, observability events,
//! configuration, and the system messages the dispatcher synthesises.

mod config;
mod event;
mod message_type;
mod outcome;
mod stage;
pub mod system;

pub use config::{DispatcherConfig, InterceptorScope};
pub use event::DispatchEvent;
pub use message_type::{CustomMessageType, DEFAULT_TYPE_KEY, HEALTH_CHECK_TYPE_KEY, MessageType};
pub use outcome::HandlerOutcome;
pub use stage::DispatchStage;
