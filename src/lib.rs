//! Courier: a message control plane.
//!
//! Courier receives messages from arbitrary sources, validates them, routes
//! each one to the handler registered for its message type, and returns a
//! uniform response after post-processing by interceptors.
//!
//! # Architecture
//!
//! Courier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and rules with no infrastructure dependencies
//! - **Ports**: Trait interfaces for handlers, validators, interceptors,
//!   and event sinks
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`message`]: Messages and the request/response envelopes
//! - [`dispatch`]: The validation, routing, and interception pipeline

pub mod dispatch;
pub mod message;
