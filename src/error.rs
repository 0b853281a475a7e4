//! Error types for provider discovery and model fetching.
//!
//! All fallible public operations in this crate return [`Result<T>`], which
//! uses [`LlmError`] as its error type. Errors carry enough context to be
//! surfaced directly to API consumers or logged for diagnosis.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm_discovery::{LlmError, Result};
//!
//! fn require_provider(id: &str) -> Result<()> {
//!     if id.is_empty() {
//!         return Err(LlmError::InvalidParameter("provider id is empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for the discovery library.
#[derive(Error, Debug)]
pub enum LlmError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// API returned an error response
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
        /// Additional error details from the response body
        details: Option<serde_json::Value>,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Response parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timed out
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// Connection could not be established
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider or resource configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A caller-supplied parameter failed validation
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Requested provider or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation is not supported by this provider
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Internal library error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Coarse error classification, useful for retry policies and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Client-side errors (4xx)
    Client,
    /// Server-side errors (5xx)
    Server,
    /// Network and transport errors
    Network,
    /// Response parsing errors
    Parsing,
    /// Parameter validation errors
    Validation,
    /// Configuration errors
    Configuration,
    /// Missing resources
    NotFound,
    /// Unsupported operations
    Unsupported,
    /// Everything else
    Unknown,
}

impl LlmError {
    /// Create an API error from a status code and message.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// Classify this error into a coarse category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError { code, .. } if *code >= 500 => ErrorCategory::Server,
            Self::ApiError { .. } => ErrorCategory::Client,
            Self::HttpError(_) | Self::ConnectionError(_) | Self::TimeoutError(_) => {
                ErrorCategory::Network
            }
            Self::JsonError(_) | Self::ParseError(_) => ErrorCategory::Parsing,
            Self::InvalidParameter(_) => ErrorCategory::Validation,
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::UnsupportedOperation(_) => ErrorCategory::Unsupported,
            Self::InternalError(_) => ErrorCategory::Unknown,
        }
    }

    /// HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether retrying the failed operation could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Server | ErrorCategory::Network
        )
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimeoutError(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, LlmError>;
