//! Error handling for CSV binding operations.
//!
//! Every failure keeps the shape of the stage that produced it. Variants are
//! grouped into three categories (configuration, stream, binding) through
//! [`Error::category`], so callers can branch on where a failure came from
//! without matching every variant.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for csvbind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad origin of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Header metadata or options could not be established; no Binder exists
    Configuration,
    /// The record source failed (malformed record, I/O, encoding)
    Stream,
    /// A row could not be projected onto a destination value
    Binding,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Stream => "stream",
            ErrorCategory::Binding => "binding",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// The first record was read but yielded no column names
    #[error("missing header metadata")]
    NoHeader,

    /// An explicit header was supplied but it is empty
    #[error("missing custom header metadata")]
    NoCustomHeader,

    /// Input ended before a header record could be read
    #[error("missing header metadata: input ended before the header record")]
    MissingHeaderRecord,

    /// Separator cannot be used by the byte-oriented tokenizer
    #[error("invalid separator {separator:?}: must be a single ASCII character")]
    InvalidSeparator { separator: char },

    /// Tokenizer-level failure, propagated as reported by the csv reader
    #[error("CSV read error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Input file could not be opened
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination has no field with this name
    #[error("no such field: {field}")]
    UnknownField { field: String },

    /// Destination field rejected a value of the wrong shape
    #[error("cannot assign {found} to field {field} (expected {expected})")]
    FieldTypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Raw value is not a base-10 signed 64-bit integer
    #[error("invalid integer for column '{column}': '{value}' ({source})")]
    ParseInt {
        column: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Raw value does not match the `YYYY-MM-DD HH:MM:SS` layout
    #[error(
        "invalid datetime for column '{column}': '{value}' (expected {}: {reason})",
        crate::constants::DATETIME_LAYOUT_DISPLAY
    )]
    ParseDateTime {
        column: String,
        value: String,
        reason: String,
    },

    /// Local time falls into a gap of the configured timezone
    #[error("datetime for column '{column}': '{value}' does not exist in timezone {timezone}")]
    NonexistentLocalTime {
        column: String,
        value: String,
        timezone: String,
    },
}

impl Error {
    /// Category this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NoHeader
            | Error::NoCustomHeader
            | Error::MissingHeaderRecord
            | Error::InvalidSeparator { .. } => ErrorCategory::Configuration,
            Error::Csv { .. } | Error::Io { .. } => ErrorCategory::Stream,
            Error::UnknownField { .. }
            | Error::FieldTypeMismatch { .. }
            | Error::ParseInt { .. }
            | Error::ParseDateTime { .. }
            | Error::NonexistentLocalTime { .. } => ErrorCategory::Binding,
        }
    }

    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create a field type mismatch error
    pub fn field_type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::FieldTypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Create an integer parsing error
    pub fn parse_int(
        column: impl Into<String>,
        value: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::ParseInt {
            column: column.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a date/time parsing error
    pub fn parse_datetime(
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ParseDateTime {
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a nonexistent local time error
    pub fn nonexistent_local_time(
        column: impl Into<String>,
        value: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self::NonexistentLocalTime {
            column: column.into(),
            value: value.into(),
            timezone: timezone.into(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}
