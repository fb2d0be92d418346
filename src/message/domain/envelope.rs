//! Request and response envelopes wrapping messages at the pipeline edges.

use super::{Message, MessageId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An inbound dispatch request.
///
/// Wraps exactly one message and holds no other state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    message: Message,
}

impl Request {
    /// Wraps a message.
    #[must_use]
    pub const fn new(message: Message) -> Self {
        Self { message }
    }

    /// Returns the wrapped message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Unwraps the message.
    #[must_use]
    pub fn into_message(self) -> Message {
        self.message
    }
}

impl From<Message> for Request {
    fn from(message: Message) -> Self {
        Self::new(message)
    }
}

/// Terminal failure classes reported in [`ResponseError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request was rejected by a validator before any side effect.
    ValidationError,
    /// No handler is registered for the message-type key.
    HandlerNotFound,
    /// The handler failed while processing the message.
    HandlerError,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::HandlerNotFound => "HANDLER_NOT_FOUND",
            Self::HandlerError => "HANDLER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error carried by a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    /// The failure class.
    pub code: ErrorCode,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ResponseError {
    /// Creates a response error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The outcome of one dispatch.
///
/// # Invariants
///
/// - `success` is `false` exactly when `error` is present
/// - `response_message` is always present, even on failure
///
/// Fields are private so the invariants can only be established through
/// [`Response::success`] and [`Response::failure`].
///
/// # Examples
///
/// ```
/// use courier::message::domain::{
///     ErrorCode, Message, MessageContent, MessageId, Response, ResponseError,
/// };
/// use mockable::DefaultClock;
///
/// let reply = Message::builder("reply-1", "bot", "conv-1")
///     .with_content(MessageContent::text("pong"))
///     .build(&DefaultClock);
/// let response = Response::success(MessageId::new("msg-1"), reply.clone());
/// assert!(response.is_success());
/// assert!(response.error().is_none());
///
/// let failed = Response::failure(
///     MessageId::new("msg-1"),
///     reply,
///     ResponseError::new(ErrorCode::HandlerError, "boom"),
/// );
/// assert!(!failed.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawResponse")]
pub struct Response {
    original_message_id: MessageId,
    response_message: Message,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ResponseError>,
}

impl Response {
    /// Creates a successful response.
    #[must_use]
    pub const fn success(original_message_id: MessageId, response_message: Message) -> Self {
        Self {
            original_message_id,
            response_message,
            success: true,
            error: None,
        }
    }

    /// Creates a failed response.
    #[must_use]
    pub const fn failure(
        original_message_id: MessageId,
        response_message: Message,
        error: ResponseError,
    ) -> Self {
        Self {
            original_message_id,
            response_message,
            success: false,
            error: Some(error),
        }
    }

    /// Returns the identifier of the message this response answers.
    #[must_use]
    pub const fn original_message_id(&self) -> &MessageId {
        &self.original_message_id
    }

    /// Returns the response message.
    #[must_use]
    pub const fn response_message(&self) -> &Message {
        &self.response_message
    }

    /// Returns `true` when dispatch succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ResponseError> {
        self.error.as_ref()
    }

    /// Returns the failure code, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error.as_ref().map(|error| error.code)
    }

    /// Derives a response with a different response message.
    ///
    /// The success flag and error are preserved.
    #[must_use]
    pub fn with_response_message(mut self, response_message: Message) -> Self {
        self.response_message = response_message;
        self
    }

    /// Derives a response by transforming the response message.
    #[must_use]
    pub fn map_response_message(mut self, f: impl FnOnce(Message) -> Message) -> Self {
        self.response_message = f(self.response_message);
        self
    }

    /// Consumes the response, returning the response message.
    #[must_use]
    pub fn into_response_message(self) -> Message {
        self.response_message
    }
}

/// Error returned when a deserialised response violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseShapeError {
    /// `success` was `true` but an error was present.
    #[error("response marked successful but carries error {0}")]
    SuccessWithError(ErrorCode),
    /// `success` was `false` but no error was present.
    #[error("response marked failed but carries no error")]
    FailureWithoutError,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    original_message_id: MessageId,
    response_message: Message,
    success: bool,
    #[serde(default)]
    error: Option<ResponseError>,
}

impl TryFrom<RawResponse> for Response {
    type Error = ResponseShapeError;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        match (raw.success, raw.error) {
            (true, None) => Ok(Self::success(raw.original_message_id, raw.response_message)),
            (false, Some(error)) => Ok(Self::failure(
                raw.original_message_id,
                raw.response_message,
                error,
            )),
            (true, Some(error)) => Err(ResponseShapeError::SuccessWithError(error.code)),
            (false, None) => Err(ResponseShapeError::FailureWithoutError),
        }
    }
}
