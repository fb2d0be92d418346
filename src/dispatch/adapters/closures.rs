//! Closure-backed plugins.
//!
//! Closures receive owned clones of their input so they can move it into an
//! `async move` block.

use crate::dispatch::ports::{
    HandlerResult, InterceptorResult, MessageHandler, RequestValidator, ResponseInterceptor,
    ValidationResult,
};
use crate::message::domain::{Message, Request, Response};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// A handler backed by an async closure.
pub struct FnHandler<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> MessageHandler for FnHandler<F>
where
    F: Fn(Message) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn handle(&self, message: &Message) -> HandlerResult {
        (self.f)(message.clone()).await
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}

/// Wraps an async closure as a shareable handler.
///
/// # Examples
///
/// ```
/// use courier::dispatch::adapters::handler_fn;
/// use courier::dispatch::domain::HandlerOutcome;
/// use courier::message::domain::Message;
///
/// let handler = handler_fn(|_message: Message| async { Ok(HandlerOutcome::NoReply) });
/// # drop(handler);
/// ```
#[must_use]
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn MessageHandler>
where
    F: Fn(Message) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(FnHandler { f })
}

/// A validator backed by an async closure.
pub struct FnValidator<F> {
    name: String,
    f: F,
}

#[async_trait]
impl<F, Fut> RequestValidator for FnValidator<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = ValidationResult> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn validate(&self, request: &Request) -> ValidationResult {
        (self.f)(request.clone()).await
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Wraps an async closure as a named, shareable validator.
#[must_use]
pub fn validator_fn<F, Fut>(name: impl Into<String>, f: F) -> Arc<dyn RequestValidator>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ValidationResult> + Send + 'static,
{
    Arc::new(FnValidator {
        name: name.into(),
        f,
    })
}

/// An interceptor backed by an async closure.
pub struct FnInterceptor<F> {
    name: String,
    f: F,
}

#[async_trait]
impl<F, Fut> ResponseInterceptor for FnInterceptor<F>
where
    F: Fn(Response) -> Fut + Send + Sync,
    Fut: Future<Output = InterceptorResult> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn intercept(&self, response: &Response) -> InterceptorResult {
        (self.f)(response.clone()).await
    }
}

impl<F> fmt::Debug for FnInterceptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnInterceptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Wraps an async closure as a named, shareable interceptor.
#[must_use]
pub fn interceptor_fn<F, Fut>(name: impl Into<String>, f: F) -> Arc<dyn ResponseInterceptor>
where
    F: Fn(Response) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = InterceptorResult> + Send + 'static,
{
    Arc::new(FnInterceptor {
        name: name.into(),
        f,
    })
}
