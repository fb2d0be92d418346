//! Bundled request validators.

use crate::dispatch::{
    error::ValidationError,
    ports::{RequestValidator, ValidationResult},
};
use crate::message::domain::{Message, Request};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Size limits applied by [`StructuralValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralLimits {
    /// Maximum serialised size of the message content in bytes.
    pub max_content_bytes: usize,
}

impl Default for StructuralLimits {
    fn default() -> Self {
        Self {
            max_content_bytes: 1024 * 1024,
        }
    }
}

impl StructuralLimits {
    /// Limits for untrusted sources.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_content_bytes: 64 * 1024,
        }
    }
}

/// Rejects structurally unusable messages.
///
/// Checks run in this order and stop at the first failure:
///
/// 1. the message id is not blank
/// 2. the source is not blank
/// 3. the conversation id is not blank
/// 4. the serialised content fits [`StructuralLimits::max_content_bytes`]
///
/// # Examples
///
/// ```
/// use courier::dispatch::adapters::{StructuralLimits, StructuralValidator};
///
/// let validator = StructuralValidator::new(StructuralLimits::strict());
/// assert_eq!(validator.limits().max_content_bytes, 64 * 1024);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StructuralValidator {
    limits: StructuralLimits,
}

impl StructuralValidator {
    /// Creates a validator with the given limits.
    #[must_use]
    pub const fn new(limits: StructuralLimits) -> Self {
        Self { limits }
    }

    /// Returns the configured limits.
    #[must_use]
    pub const fn limits(&self) -> &StructuralLimits {
        &self.limits
    }

    fn check(&self, message: &Message) -> ValidationResult {
        if message.id().is_blank() {
            return Err(ValidationError::new("message id must not be blank"));
        }
        if message.source().trim().is_empty() {
            return Err(ValidationError::new("message source must not be blank"));
        }
        if !message.conversation_id().is_valid() {
            return Err(ValidationError::new("conversation id must not be blank"));
        }

        let size = serde_json::to_vec(message.content())
            .map_err(|err| ValidationError::new(format!("content is not serialisable: {err}")))?
            .len();
        if size > self.limits.max_content_bytes {
            return Err(ValidationError::new(format!(
                "content is {size} bytes, exceeding the limit of {} bytes",
                self.limits.max_content_bytes
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RequestValidator for StructuralValidator {
    fn name(&self) -> &str {
        "structural"
    }

    async fn validate(&self, request: &Request) -> ValidationResult {
        self.check(request.message())
    }
}
