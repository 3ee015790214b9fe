//! Error handling for typogenerator

use thiserror::Error;

/// Main error type for typogenerator
#[derive(Error, Debug, Clone)]
pub enum TypoError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Mapping error ({locale}): {message}")]
    Mapping { locale: String, message: String },

    #[error("Strategy error ({strategy}): {message}")]
    Strategy { strategy: String, message: String },

    #[error("Domain parse error for '{domain}': {message}")]
    DomainParse { domain: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TypoError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a mapping table error
    pub fn mapping(locale: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mapping {
            locale: locale.into(),
            message: message.into(),
        }
    }

    /// Create a strategy generation error
    pub fn strategy(strategy: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Strategy {
            strategy: strategy.into(),
            message: message.into(),
        }
    }

    /// Create a domain parse error
    pub fn domain_parse(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DomainParse {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or TYPOGEN_* variables", message)
            }
            Self::Mapping { locale, message } => {
                format!("❌ Mapping table '{}' is invalid: {}\n💡 A key must not map to itself and needs at least one replacement", locale, message)
            }
            Self::Strategy { strategy, message } => {
                format!("❌ Strategy '{}' failed: {}", strategy, message)
            }
            Self::DomainParse { domain, message } => {
                format!("❌ Could not split domain '{}': {}\n💡 Pass a full domain such as example.co.uk, or drop --domain", domain, message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message } => {
                format!("❌ I/O error: {}", message)
            }
            Self::Output { message } => {
                format!("❌ Could not write results: {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for TypoError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for TypoError {
    fn from(err: serde_json::Error) -> Self {
        Self::output(err.to_string())
    }
}

impl From<csv::Error> for TypoError {
    fn from(err: csv::Error) -> Self {
        Self::output(err.to_string())
    }
}

impl From<tokio::task::JoinError> for TypoError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Strategy task failed: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TypoError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::TypoError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::TypoError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::TypoError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::TypoError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::TypoError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::TypoError::internal(format!($fmt, $($arg)*))
    };
}
