//! Unified error types for soc-maturity.
//!
//! Scoring never fails on a zero denominator (those terms resolve to 0), so
//! every variant here describes input the caller has to fix.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for soc-maturity operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaturityError {
    /// Input outside its documented range
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A response or evidence label that is not part of the known scale
    #[error("Unknown {field} value '{value}' for question {question}")]
    UnknownCategoryValue {
        field: CategoryField,
        value: String,
        question: String,
    },

    /// Errors while reading an input document
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Which questionnaire scale an unknown label came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Response,
    Evidence,
}

impl std::fmt::Display for CategoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Response => write!(f, "response"),
            Self::Evidence => write!(f, "evidence"),
        }
    }
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown input format - expected YAML or JSON")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for soc-maturity operations
pub type Result<T> = std::result::Result<T, MaturityError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MaturityError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an input whose format cannot be detected
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::parse(format!("at {}", path.into()), ParseErrorKind::UnknownFormat)
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an unknown-label error for a questionnaire scale
    pub fn unknown_value(
        field: CategoryField,
        value: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self::UnknownCategoryValue {
            field,
            value: value.into(),
            question: question.into(),
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MaturityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MaturityError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for MaturityError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<crate::config::ConfigFileError> for MaturityError {
    fn from(err: crate::config::ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, so a
/// failure deep in input loading reads like
/// `loading responses.yaml: YAML deserialization`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MaturityError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MaturityError, new_ctx: &str) -> MaturityError {
    match err {
        MaturityError::Parse {
            context: existing,
            source,
        } => MaturityError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MaturityError::Io {
            path,
            message,
            source,
        } => MaturityError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MaturityError::Validation(msg) => MaturityError::Validation(chain_context(new_ctx, &msg)),
        MaturityError::Config(msg) => MaturityError::Config(chain_context(new_ctx, &msg)),
        // The label and question already pinpoint the failure
        other @ MaturityError::UnknownCategoryValue { .. } => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to a validation error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| MaturityError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| MaturityError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaturityError::unknown_format("responses.txt");
        let display = err.to_string();
        assert!(
            display.contains("parse"),
            "Error message should mention parsing: {display}"
        );

        let err = MaturityError::unknown_value(CategoryField::Evidence, "Preuve orale", "GOV-1");
        assert_eq!(
            err.to_string(),
            "Unknown evidence value 'Preuve orale' for question GOV-1"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MaturityError::io("/path/to/weights.yaml", io_err);

        assert!(err.to_string().contains("/path/to/weights.yaml"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(MaturityError::parse(
            "initial context",
            ParseErrorKind::UnknownFormat,
        ));

        match initial.context("outer context") {
            Err(MaturityError::Parse { context, .. }) => {
                assert_eq!(context, "outer context: initial context");
            }
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(MaturityError::validation("tactics out of range"))
        }

        fn middle() -> Result<()> {
            inner().context("coverage")
        }

        fn outer() -> Result<()> {
            middle().context("purple metrics")
        }

        match outer() {
            Err(MaturityError::Validation(msg)) => {
                assert_eq!(msg, "purple metrics: coverage: tactics out of range");
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_context_leaves_unknown_value_untouched() {
        let err: Result<()> = Err(MaturityError::unknown_value(
            CategoryField::Response,
            "6",
            "Q1",
        ));
        match err.context("scoring") {
            Err(MaturityError::UnknownCategoryValue { value, question, .. }) => {
                assert_eq!(value, "6");
                assert_eq!(question, "Q1");
            }
            _ => panic!("Expected UnknownCategoryValue"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(MaturityError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.context_none("missing value").unwrap(), 42);

        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(MaturityError::Validation(msg)) => assert_eq!(msg, "missing value"),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_config_file_error_becomes_config_error() {
        let err: MaturityError =
            crate::config::ConfigFileError::NotFound(PathBuf::from("team.yaml")).into();
        match err {
            MaturityError::Config(msg) => assert!(msg.contains("team.yaml"), "{msg}"),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
