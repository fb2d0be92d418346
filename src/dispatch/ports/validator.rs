//! Validator port: pre-dispatch request checks.

use crate::dispatch::error::ValidationError;
use crate::message::domain::Request;
use async_trait::async_trait;

/// Result type for validation operations.
pub type ValidationResult = Result<(), ValidationError>;

/// Checks a request before it is routed.
///
/// Validators run in registration order and the first failure aborts the
/// dispatch. A rejected request never reaches a handler.
#[async_trait]
pub trait RequestValidator: Send + Sync {
    /// A human-readable name used in observability events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Validates a request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] describing why the request is rejected.
    async fn validate(&self, request: &Request) -> ValidationResult;
}
