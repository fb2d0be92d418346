//! Observer forwarding dispatch events to `tracing`.

use crate::dispatch::{domain::DispatchEvent, ports::DispatchObserver};
use crate::message::domain::ErrorCode;
use tracing::{debug, info, trace, warn};

/// The default dispatch observer.
///
/// Stage transitions are logged at `trace`, completions at `debug`,
/// validation rejections at `info`, and faults at `warn`. The library never
/// installs a subscriber; embedding applications choose where events go.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates the observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DispatchObserver for TracingObserver {
    fn observe(&self, event: &DispatchEvent) {
        match event {
            DispatchEvent::StageEntered { message_id, stage } => {
                trace!(message_id = %message_id, stage = %stage, "dispatch stage entered");
            }
            DispatchEvent::ValidationFailed {
                message_id,
                validator,
                reason,
            } => {
                info!(
                    message_id = %message_id,
                    validator = %validator,
                    reason = %reason,
                    "request rejected"
                );
            }
            DispatchEvent::HandlerNotFound {
                message_id,
                message_type,
            } => {
                warn!(
                    message_id = %message_id,
                    message_type = %message_type,
                    "no handler registered"
                );
            }
            DispatchEvent::HandlerFailed {
                message_id,
                message_type,
                reason,
            } => {
                warn!(
                    message_id = %message_id,
                    message_type = %message_type,
                    reason = %reason,
                    "handler failed"
                );
            }
            DispatchEvent::HandlerReplaced { message_type } => {
                warn!(message_type = %message_type, "handler registration replaced");
            }
            DispatchEvent::InterceptorFailed {
                message_id,
                interceptor,
                position,
                reason,
            } => {
                warn!(
                    message_id = %message_id,
                    interceptor = %interceptor,
                    position,
                    reason = %reason,
                    "interceptor failed, keeping previous response"
                );
            }
            DispatchEvent::Cancelled { message_id, stage } => {
                warn!(message_id = %message_id, stage = %stage, "dispatch cancelled");
            }
            DispatchEvent::Completed {
                message_id,
                success,
                error_code,
                interceptor_faults,
                elapsed,
            } => {
                debug!(
                    message_id = %message_id,
                    success,
                    error_code = error_code.map(ErrorCode::as_str),
                    interceptor_faults,
                    elapsed = ?elapsed,
                    "dispatch completed"
                );
            }
        }
    }
}
