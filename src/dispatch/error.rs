//! Error types raised by dispatch plugins.
//!
//! Uses `thiserror` for typed errors. None of these escape
//! [`Dispatcher::process`](crate::dispatch::services::Dispatcher::process);
//! the dispatcher folds them into a failed
//! [`Response`](crate::message::domain::Response).

use std::sync::Arc;
use thiserror::Error;

/// A validator rejected a request.
///
/// # Examples
///
/// ```
/// use courier::dispatch::error::ValidationError;
///
/// let err = ValidationError::new("source must not be blank");
/// assert_eq!(err.to_string(), "source must not be blank");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A handler failed to process a message.
///
/// The `Display` output is exactly the failure message, which is what the
/// dispatcher reports in `Response.error.message`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl HandlerError {
    /// Creates a handler error with a message and no underlying cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, using its description as the message.
    #[must_use]
    pub fn from_source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Arc::new(err)),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An interceptor failed to post-process a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InterceptorError {
    message: String,
}

impl InterceptorError {
    /// Creates an interceptor error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
