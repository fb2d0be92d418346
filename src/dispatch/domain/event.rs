//! Structured observability events emitted by the dispatcher.

use super::{DispatchStage, MessageType};
use crate::message::domain::{ErrorCode, MessageId};
use std::time::Duration;

/// An observable occurrence inside the dispatch pipeline.
///
/// Events are delivered to a
/// [`DispatchObserver`](crate::dispatch::ports::DispatchObserver); they never
/// influence the dispatch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// The pipeline entered a stage for a message.
    StageEntered {
        /// The inbound message.
        message_id: MessageId,
        /// The stage entered.
        stage: DispatchStage,
    },
    /// A validator rejected the request.
    ValidationFailed {
        /// The inbound message.
        message_id: MessageId,
        /// Name of the rejecting validator.
        validator: String,
        /// The rejection reason.
        reason: String,
    },
    /// No handler was registered for the routing key.
    HandlerNotFound {
        /// The inbound message.
        message_id: MessageId,
        /// The unmatched routing key.
        message_type: MessageType,
    },
    /// The handler failed.
    HandlerFailed {
        /// The inbound message.
        message_id: MessageId,
        /// The routing key.
        message_type: MessageType,
        /// The failure description.
        reason: String,
    },
    /// A handler registration replaced an existing one.
    HandlerReplaced {
        /// The routing key that was re-registered.
        message_type: MessageType,
    },
    /// An interceptor failed; its output was discarded.
    InterceptorFailed {
        /// The inbound message.
        message_id: MessageId,
        /// Name of the failing interceptor.
        interceptor: String,
        /// Zero-based position in the interceptor chain.
        position: usize,
        /// The failure description.
        reason: String,
    },
    /// Dispatch was cancelled by the caller.
    Cancelled {
        /// The inbound message.
        message_id: MessageId,
        /// The stage that was running.
        stage: DispatchStage,
    },
    /// Dispatch finished and produced a response.
    Completed {
        /// The inbound message.
        message_id: MessageId,
        /// Whether the response reports success.
        success: bool,
        /// The failure class, when unsuccessful.
        error_code: Option<ErrorCode>,
        /// Number of interceptor faults swallowed.
        interceptor_faults: usize,
        /// Wall-clock time spent in the pipeline.
        elapsed: Duration,
    },
}

impl DispatchEvent {
    /// Returns the inbound message the event relates to, if any.
    #[must_use]
    pub const fn message_id(&self) -> Option<&MessageId> {
        match self {
            Self::StageEntered { message_id, .. }
            | Self::ValidationFailed { message_id, .. }
            | Self::HandlerNotFound { message_id, .. }
            | Self::HandlerFailed { message_id, .. }
            | Self::InterceptorFailed { message_id, .. }
            | Self::Cancelled { message_id, .. }
            | Self::Completed { message_id, .. } => Some(message_id),
            Self::HandlerReplaced { .. } => None,
        }
    }
}
