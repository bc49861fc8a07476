//! Centralized error classification

use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Centralized error handler for all network operations
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Authentication errors - the API key is missing or wrong
            ApiError::Http { status, .. } if *status == 400 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // A backend that answers with the wrong shape will not fix itself
            ApiError::Malformed(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            // Other errors
            _ => LogLevel::Warn,
        }
    }
}
