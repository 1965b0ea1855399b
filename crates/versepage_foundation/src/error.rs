//! Error types for the Versepage system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Versepage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed-reference error.
    #[must_use]
    pub fn parse(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError {
            input: input.into(),
        })
    }

    /// Creates an unknown book error.
    #[must_use]
    pub fn unknown_book(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownBook(name.into()))
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber(text.into()))
    }

    /// Creates an encoding overflow error for a chapter or verse ≥ 1000.
    #[must_use]
    pub fn encoding_overflow(chapter: u32, verse: u32) -> Self {
        Self::new(ErrorKind::EncodingOverflow { chapter, verse })
    }

    /// Creates a dataset loading error.
    #[must_use]
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Dataset(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if this error came from reading a reference string.
    ///
    /// Grammar failures, unknown books, unreadable numbers and ids that do
    /// not fit the verse-id encoding all count as reference errors.
    #[must_use]
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ParseError { .. }
                | ErrorKind::UnknownBook(_)
                | ErrorKind::InvalidNumber(_)
                | ErrorKind::EncodingOverflow { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The reference does not match the citation grammar.
    #[error("malformed citation {input:?}")]
    ParseError {
        /// The reference text that failed to parse.
        input: String,
    },

    /// The book name is not in the canonical book table.
    #[error("Unknown book: {0}")]
    UnknownBook(String),

    /// A chapter or verse number could not be read.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Chapter or verse too large for the verse-id encoding.
    #[error("chapter {chapter} verse {verse} exceeds the verse id encoding (max 999)")]
    EncodingOverflow {
        /// The chapter number.
        chapter: u32,
        /// The verse number.
        verse: u32,
    },

    /// Book id outside 1..=66.
    #[error("invalid book id: {0}")]
    InvalidBookId(u32),

    /// Page-data dataset could not be read or decoded.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// File or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file or dataset name.
    pub source: Option<String>,
    /// Row number in the source (1-indexed, header excluded).
    pub row: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the row number.
    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.row) {
            (Some(source), Some(row)) => write!(f, "at {source} row {row}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(row)) => write!(f, "at row {row}"),
            (None, None) => Ok(()),
        }
    }
}
