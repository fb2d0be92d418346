//! The dispatch pipeline: validate, route, invoke, respond, intercept.

use super::{
    chain::{InterceptorChain, ValidatorChain},
    guard::{Guarded, guarded},
    registry::HandlerRegistry,
};
use crate::dispatch::{
    adapters::TracingObserver,
    domain::{
        DispatchEvent, DispatchStage, DispatcherConfig, HandlerOutcome, MessageType,
        system::{self, INTERCEPTOR_FAULTS_KEY},
    },
    ports::{DispatchObserver, MessageHandler, RequestValidator, ResponseInterceptor},
};
use crate::message::domain::{ErrorCode, Message, Request, Response, ResponseError};
use mockable::{Clock, DefaultClock};
use serde_json::Value;
use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// Single-pass message dispatcher.
///
/// Owns the handler registry and the validator and interceptor chains. Every
/// call to [`Dispatcher::process`] returns a well-formed [`Response`]; no
/// plugin error or panic escapes.
///
/// The dispatcher is `Send + Sync` and is meant to be shared through an
/// `Arc` across tasks. Handlers, validators, and interceptors may be added
/// while dispatches are in flight; a running dispatch keeps the plugin
/// snapshot it started with.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use courier::dispatch::adapters::handler_fn;
/// use courier::dispatch::domain::HandlerOutcome;
/// use courier::dispatch::services::Dispatcher;
/// use courier::message::domain::{Message, MessageContent};
/// use mockable::DefaultClock;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread()
/// #     .build()
/// #     .expect("runtime");
/// # runtime.block_on(async {
/// let dispatcher = Dispatcher::new(Arc::new(DefaultClock));
/// dispatcher.register_handler(
///     "echo",
///     handler_fn(|message: Message| async move {
///         Ok(HandlerOutcome::Reply(message))
///     }),
/// );
///
/// let inbound = Message::builder("msg-1", "cli", "conv-1")
///     .with_content(MessageContent::text("hi"))
///     .with_type("echo")
///     .build(&DefaultClock);
/// let response = dispatcher.send_message(inbound).await;
/// assert!(response.is_success());
/// # });
/// ```
pub struct Dispatcher<C>
where
    C: Clock + Send + Sync,
{
    registry: HandlerRegistry,
    validators: ValidatorChain,
    interceptors: InterceptorChain,
    observer: Arc<dyn DispatchObserver>,
    config: DispatcherConfig,
    clock: Arc<C>,
}

impl<C> Dispatcher<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher with default configuration that logs through
    /// [`TracingObserver`].
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        let observer: Arc<dyn DispatchObserver> = Arc::new(TracingObserver::new());
        Self {
            registry: HandlerRegistry::with_observer(Arc::clone(&observer)),
            validators: ValidatorChain::new(),
            interceptors: InterceptorChain::new(),
            observer,
            config: DispatcherConfig::default(),
            clock,
        }
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.registry.set_observer(Arc::clone(&observer));
        self.observer = observer;
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Returns the handler registry.
    #[must_use]
    pub const fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Returns the validator chain.
    #[must_use]
    pub const fn validators(&self) -> &ValidatorChain {
        &self.validators
    }

    /// Returns the interceptor chain.
    #[must_use]
    pub const fn interceptors(&self) -> &InterceptorChain {
        &self.interceptors
    }

    /// Registers `handler` for a message-type key.
    ///
    /// Replacing an existing registration is allowed and reported to the
    /// observer as [`DispatchEvent::HandlerReplaced`].
    pub fn register_handler(
        &self,
        key: impl Into<MessageType>,
        handler: Arc<dyn MessageHandler>,
    ) {
        self.registry.register(key.into(), handler);
    }

    /// Appends a validator to the end of the validator chain.
    pub fn add_validator(&self, validator: Arc<dyn RequestValidator>) {
        self.validators.push(validator);
    }

    /// Appends an interceptor to the end of the interceptor chain.
    pub fn add_interceptor(&self, interceptor: Arc<dyn ResponseInterceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Runs a request through the pipeline.
    pub async fn process(&self, request: &Request) -> Response {
        self.dispatch(request, None).await
    }

    /// Runs a request through the pipeline, aborting if `cancel` fires.
    ///
    /// Cancellation before or during validation yields a `VALIDATION_ERROR`
    /// response; cancellation at any later stage yields `HANDLER_ERROR`.
    /// Cancellation takes precedence over an already-built success: if the
    /// token fires while interceptors run on a successful response, the
    /// caller receives `HANDLER_ERROR`.
    pub async fn process_with_cancellation(
        &self,
        request: &Request,
        cancel: &CancellationToken,
    ) -> Response {
        self.dispatch(request, Some(cancel)).await
    }

    /// Wraps `message` in a [`Request`] and processes it.
    pub async fn send_message(&self, message: Message) -> Response {
        self.process(&Request::new(message)).await
    }

    async fn dispatch(&self, request: &Request, cancel: Option<&CancellationToken>) -> Response {
        let started = Instant::now();
        let message = request.message();
        self.enter(message, DispatchStage::Received);

        let produced = self.produce(request, cancel).await;
        let (intercepted, faults) = if self
            .config
            .interceptor_scope
            .applies_to(produced.is_success())
        {
            self.intercept(message, produced, cancel).await
        } else {
            (produced, 0)
        };
        let response = self.report_faults(intercepted, faults);

        self.enter(message, DispatchStage::Done);
        self.observer.observe(&DispatchEvent::Completed {
            message_id: message.id().clone(),
            success: response.is_success(),
            error_code: response.error_code(),
            interceptor_faults: faults,
            elapsed: started.elapsed(),
        });
        response
    }

    async fn produce(&self, request: &Request, cancel: Option<&CancellationToken>) -> Response {
        if let ControlFlow::Break(rejected) = self.run_validators(request, cancel).await {
            return rejected;
        }

        let message = request.message();
        let message_type = MessageType::of(message);
        match self.route(message, &message_type, cancel) {
            ControlFlow::Continue(handler) => {
                self.invoke(message, &message_type, handler.as_ref(), cancel)
                    .await
            }
            ControlFlow::Break(unrouted) => unrouted,
        }
    }

    async fn run_validators(
        &self,
        request: &Request,
        cancel: Option<&CancellationToken>,
    ) -> ControlFlow<Response> {
        let message = request.message();
        self.enter(message, DispatchStage::Validating);
        if is_cancelled(cancel) {
            return ControlFlow::Break(self.cancelled(message, DispatchStage::Validating));
        }

        let validators = self.validators.snapshot();
        for validator in validators.iter() {
            let reason = match guarded(validator.validate(request), cancel).await {
                Guarded::Completed(Ok(())) => continue,
                Guarded::Completed(Err(err)) => err.to_string(),
                Guarded::Panicked(panic_message) => panic_message,
                Guarded::Cancelled => {
                    return ControlFlow::Break(
                        self.cancelled(message, DispatchStage::Validating),
                    );
                }
            };
            self.observer.observe(&DispatchEvent::ValidationFailed {
                message_id: message.id().clone(),
                validator: validator.name().to_owned(),
                reason: reason.clone(),
            });
            return ControlFlow::Break(self.failure(message, ErrorCode::ValidationError, &reason));
        }
        ControlFlow::Continue(())
    }

    fn route(
        &self,
        message: &Message,
        message_type: &MessageType,
        cancel: Option<&CancellationToken>,
    ) -> ControlFlow<Response, Arc<dyn MessageHandler>> {
        self.enter(message, DispatchStage::Routing);
        if is_cancelled(cancel) {
            return ControlFlow::Break(self.cancelled(message, DispatchStage::Routing));
        }

        self.registry.lookup(message_type).map_or_else(
            || {
                self.observer.observe(&DispatchEvent::HandlerNotFound {
                    message_id: message.id().clone(),
                    message_type: message_type.clone(),
                });
                ControlFlow::Break(self.failure(
                    message,
                    ErrorCode::HandlerNotFound,
                    &format!("No handler registered for message type '{message_type}'"),
                ))
            },
            ControlFlow::Continue,
        )
    }

    async fn invoke(
        &self,
        message: &Message,
        message_type: &MessageType,
        handler: &dyn MessageHandler,
        cancel: Option<&CancellationToken>,
    ) -> Response {
        self.enter(message, DispatchStage::Invoking);
        let reason = match guarded(handler.handle(message), cancel).await {
            Guarded::Completed(Ok(outcome)) => return self.respond(message, outcome),
            Guarded::Completed(Err(err)) => err.to_string(),
            Guarded::Panicked(panic_message) => panic_message,
            Guarded::Cancelled => return self.cancelled(message, DispatchStage::Invoking),
        };
        self.observer.observe(&DispatchEvent::HandlerFailed {
            message_id: message.id().clone(),
            message_type: message_type.clone(),
            reason: reason.clone(),
        });
        self.failure(message, ErrorCode::HandlerError, &reason)
    }

    fn respond(&self, message: &Message, outcome: HandlerOutcome) -> Response {
        self.enter(message, DispatchStage::Responding);
        let reply = match outcome {
            HandlerOutcome::Reply(reply) if reply.conversation_id().is_valid() => reply,
            HandlerOutcome::Reply(reply) => {
                reply.with_conversation_id(message.conversation_id().or_generate())
            }
            HandlerOutcome::NoReply => system::no_reply_message(message, &*self.clock),
        };
        Response::success(message.id().clone(), reply)
    }

    async fn intercept(
        &self,
        message: &Message,
        response: Response,
        cancel: Option<&CancellationToken>,
    ) -> (Response, usize) {
        self.enter(message, DispatchStage::Intercepting);
        let interceptors = self.interceptors.snapshot();
        let mut current = response;
        let mut faults = 0;

        for (position, interceptor) in interceptors.iter().enumerate() {
            let reason = match guarded(interceptor.intercept(&current), cancel).await {
                Guarded::Completed(Ok(next)) => {
                    current = with_valid_conversation(next, message);
                    continue;
                }
                Guarded::Completed(Err(err)) => err.to_string(),
                Guarded::Panicked(panic_message) => panic_message,
                Guarded::Cancelled if current.is_success() => {
                    return (self.cancelled(message, DispatchStage::Intercepting), faults);
                }
                Guarded::Cancelled => return (current, faults),
            };
            faults += 1;
            self.observer.observe(&DispatchEvent::InterceptorFailed {
                message_id: message.id().clone(),
                interceptor: interceptor.name().to_owned(),
                position,
                reason,
            });
        }
        (current, faults)
    }

    fn report_faults(&self, response: Response, faults: usize) -> Response {
        if self.config.report_interceptor_faults && faults > 0 {
            response.map_response_message(|reply| {
                reply.with_metadata_entry(INTERCEPTOR_FAULTS_KEY, Value::from(faults))
            })
        } else {
            response
        }
    }

    fn cancelled(&self, message: &Message, stage: DispatchStage) -> Response {
        self.observer.observe(&DispatchEvent::Cancelled {
            message_id: message.id().clone(),
            stage,
        });
        self.failure(
            message,
            stage.cancellation_code(),
            &format!("dispatch cancelled during {stage}"),
        )
    }

    fn failure(&self, message: &Message, code: ErrorCode, description: &str) -> Response {
        Response::failure(
            message.id().clone(),
            system::error_message(message, code, description, &*self.clock),
            ResponseError::new(code, description),
        )
    }

    fn enter(&self, message: &Message, stage: DispatchStage) {
        self.observer.observe(&DispatchEvent::StageEntered {
            message_id: message.id().clone(),
            stage,
        });
    }
}

impl Default for Dispatcher<DefaultClock> {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl<C> fmt::Debug for Dispatcher<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("validators", &self.validators)
            .field("interceptors", &self.interceptors)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn with_valid_conversation(response: Response, inbound: &Message) -> Response {
    if response.response_message().conversation_id().is_valid() {
        response
    } else {
        response.map_response_message(|reply| {
            reply.with_conversation_id(inbound.conversation_id().or_generate())
        })
    }
}

fn is_cancelled(cancel: Option<&CancellationToken>) -> bool {
    cancel.is_some_and(CancellationToken::is_cancelled)
}
