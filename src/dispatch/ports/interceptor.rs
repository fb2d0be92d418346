//! Interceptor port: response post-processing.

use crate::dispatch::error::InterceptorError;
use crate::message::domain::Response;
use async_trait::async_trait;

/// Result type for interceptor invocations.
pub type InterceptorResult = Result<Response, InterceptorError>;

/// Post-processes a response after it has been built.
///
/// Interceptors run in registration order, each receiving the previous one's
/// output. A failing interceptor is skipped: its error is observed and the
/// previous response flows on unchanged.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// A human-readable name used in observability events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns a possibly modified copy of `response`.
    ///
    /// # Errors
    ///
    /// Returns [`InterceptorError`] when post-processing fails. The error
    /// never changes the dispatch outcome.
    async fn intercept(&self, response: &Response) -> InterceptorResult;
}
