//! Single-pass dispatch pipeline.
//!
//! A [`Request`](crate::message::domain::Request) flows through:
//!
//! 1. the validator chain (fail-fast, `VALIDATION_ERROR`)
//! 2. handler lookup by `metadata["type"]`, defaulting to `default`
//!    (`HANDLER_NOT_FOUND`)
//! 3. handler invocation (`HANDLER_ERROR`)
//! 4. response construction, synthesising an `mcp_system` acknowledgement
//!    when the handler has nothing to say
//! 5. the interceptor chain, whose faults are swallowed
//!
//! # Architecture
//!
//! - [`domain`]: routing keys, outcomes, stages, events, configuration
//! - [`ports`]: handler, validator, interceptor, and observer traits
//! - [`adapters`]: closure plugins, observers, and bundled plugins
//! - [`services`]: the registry, plugin chains, and [`services::Dispatcher`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
