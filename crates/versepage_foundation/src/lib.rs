//! Core types for Versepage.
//!
//! This crate provides:
//! - [`BookId`] - Canonical book identifiers (Genesis = 1 … Revelation = 66)
//! - [`VerseId`] - Dense `(book, chapter, verse)` keys
//! - [`BookTable`] - Canonical book-name lookup
//! - [`ChapterLengths`] - Pluggable chapter-length oracle
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod book;
pub mod chapter;
pub mod error;
pub mod verse;

pub use book::{BookId, BookTable, CANONICAL_BOOKS};
pub use chapter::{ChapterLengths, DEFAULT_FALLBACK_VERSES, UniformChapterLength};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use verse::{MAX_COMPONENT, VerseId};
