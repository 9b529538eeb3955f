//! Error types for the picker binding library.

use thiserror::Error;

/// Comprehensive error type for all picker binding operations.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Text does not conform to the combined native format
    #[error("text '{input}' does not match format '{format}': {source}")]
    Parse {
        format: String,
        input: String,
        #[source]
        source: jiff::Error,
    },
    /// Value supplied to the binder is of an unsupported shape or violates
    /// the caller contract for string input
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
    /// A value could not be rendered with the configured format
    #[error("cannot render value with format '{format}': {source}")]
    Format {
        format: String,
        #[source]
        source: jiff::Error,
    },
    /// Epoch seconds outside the representable timestamp range
    #[error("epoch seconds {seconds} out of range: {source}")]
    EpochOutOfRange {
        seconds: i64,
        #[source]
        source: jiff::Error,
    },
    /// Registration hook invoked more than once
    #[error("picker control '{name}' is already registered")]
    AlreadyRegistered { name: String },
}

impl PickerError {
    /// Creates a parse error for the given format and input text.
    pub fn parse(format: impl Into<String>, input: impl Into<String>, source: jiff::Error) -> Self {
        Self::Parse {
            format: format.into(),
            input: input.into(),
            source,
        }
    }

    /// Creates an invalid value error for a named field.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for picker binding operations
pub type Result<T> = std::result::Result<T, PickerError>;
