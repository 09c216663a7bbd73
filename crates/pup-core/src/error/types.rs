//! Core error type for Pup SDK operations

use thiserror::Error;

/// Result type alias for Pup SDK operations
pub type PupResult<T> = Result<T, PupError>;

/// Main error type for the Pup SDK.
///
/// The first five variants are the failure classes a backend call can
/// produce; `Config` covers SDK misuse before any call is made. Each
/// variant carries a stable `error_code` for programmatic handling.
#[derive(Error, Debug, Clone)]
pub enum PupError {
    /// Transport-level failures: DNS, TCP, TLS, or an HTTP 5xx from the backend
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The backend rejected our credentials (HTTP 401)
    #[error("Authentication error: {message}")]
    Auth { message: String },

    /// No response within the configured budget, or an HTTP 408
    #[error("Timeout error: {message}")]
    Timeout { message: String },

    /// The response body could not be parsed as the expected reply
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// The backend returned a structured error payload (other 4xx)
    #[error("Application error: {message}")]
    Application {
        message: String,
        status: Option<u16>,
    },

    /// Client-side configuration problems (e.g. no usable API key)
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PupError {
    /// Create a new connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Create a new protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a new application error
    pub fn application(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Application {
            message: message.into(),
            status,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable code identifying the error class
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "CONNECTION_ERROR",
            Self::Auth { .. } => "AUTH_ERROR",
            Self::Timeout { .. } => "TIMEOUT_ERROR",
            Self::Protocol { .. } => "PROTOCOL_ERROR",
            Self::Application { .. } => "APPLICATION_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Whether retrying the same call later could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(PupError::connection("x").error_code(), "CONNECTION_ERROR");
        assert_eq!(PupError::auth("x").error_code(), "AUTH_ERROR");
        assert_eq!(PupError::timeout("x").error_code(), "TIMEOUT_ERROR");
        assert_eq!(PupError::protocol("x").error_code(), "PROTOCOL_ERROR");
        assert_eq!(
            PupError::application("x", Some(422)).error_code(),
            "APPLICATION_ERROR"
        );
        assert_eq!(PupError::config("x").error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_includes_message() {
        let err = PupError::connection("server unreachable");
        assert_eq!(err.to_string(), "Connection error: server unreachable");

        let err = PupError::application("bad request", Some(422));
        assert_eq!(err.to_string(), "Application error: bad request");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(PupError::connection("x").is_retryable());
        assert!(PupError::timeout("x").is_retryable());
        assert!(!PupError::auth("x").is_retryable());
        assert!(!PupError::protocol("x").is_retryable());
        assert!(!PupError::application("x", None).is_retryable());
        assert!(!PupError::config("x").is_retryable());
    }
}
