//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// Which responses the interceptor chain sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptorScope {
    /// Only responses produced by a handler (reply or no-reply).
    ///
    /// Validation, routing, and handler failures bypass interceptors.
    #[default]
    SuccessOnly,
    /// Every terminal response, including failures.
    AllOutcomes,
}

impl InterceptorScope {
    /// Returns `true` if a response with the given success flag should be
    /// intercepted.
    #[must_use]
    pub const fn applies_to(self, success: bool) -> bool {
        match self {
            Self::SuccessOnly => success,
            Self::AllOutcomes => true,
        }
    }
}

/// Configuration for a [`Dispatcher`](crate::dispatch::services::Dispatcher).
///
/// # Examples
///
/// ```
/// use courier::dispatch::domain::{DispatcherConfig, InterceptorScope};
///
/// let config = DispatcherConfig::default();
/// assert_eq!(config.interceptor_scope, InterceptorScope::SuccessOnly);
/// assert!(!config.report_interceptor_faults);
///
/// let parsed = DispatcherConfig::from_json_str(r#"{"interceptor_scope": "all_outcomes"}"#)
///     .expect("valid config");
/// assert_eq!(parsed, DispatcherConfig::uniform_post_processing());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Which responses interceptors run on.
    pub interceptor_scope: InterceptorScope,
    /// Whether swallowed interceptor faults are counted into the response
    /// message metadata under `interceptorFaults`.
    pub report_interceptor_faults: bool,
}

impl DispatcherConfig {
    /// Runs interceptors on every terminal response.
    #[must_use]
    pub const fn uniform_post_processing() -> Self {
        Self {
            interceptor_scope: InterceptorScope::AllOutcomes,
            report_interceptor_faults: false,
        }
    }

    /// Enables or disables interceptor fault reporting.
    #[must_use]
    pub const fn with_fault_reporting(mut self, enabled: bool) -> Self {
        self.report_interceptor_faults = enabled;
        self
    }

    /// Sets the interceptor scope.
    #[must_use]
    pub const fn with_interceptor_scope(mut self, scope: InterceptorScope) -> Self {
        self.interceptor_scope = scope;
        self
    }

    /// Parses configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the input is not valid JSON or has
    /// fields of the wrong type.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
