//! Dispatch pipeline stages.

use crate::message::domain::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The states a single dispatch moves through, in order.
///
/// `Received → Validating → Routing → Invoking → Responding → Intercepting →
/// Done`. Failures jump straight to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStage {
    /// The request has been accepted.
    Received,
    /// Validators are running.
    Validating,
    /// The handler is being resolved.
    Routing,
    /// The handler is running.
    Invoking,
    /// The response is being built from the handler outcome.
    Responding,
    /// Interceptors are running.
    Intercepting,
    /// A response has been produced.
    Done,
}

impl DispatchStage {
    /// Returns the stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Validating => "validating",
            Self::Routing => "routing",
            Self::Invoking => "invoking",
            Self::Responding => "responding",
            Self::Intercepting => "intercepting",
            Self::Done => "done",
        }
    }

    /// Returns the error code reported when dispatch is cancelled in this
    /// stage.
    ///
    /// Cancellation before or during validation is a validation failure;
    /// anywhere later it is a handler failure.
    #[must_use]
    pub const fn cancellation_code(self) -> ErrorCode {
        match self {
            Self::Received | Self::Validating => ErrorCode::ValidationError,
            Self::Routing
            | Self::Invoking
            | Self::Responding
            | Self::Intercepting
            | Self::Done => ErrorCode::HandlerError,
        }
    }
}

impl fmt::Display for DispatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
