//! Scripture citation parsing.
//!
//! This crate turns a human-written citation like "Jn 3:16-18" into the
//! ordered verse ids it covers.
//!
//! # Architecture
//!
//! ```text
//! "Jn 3:16-18"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NORMALIZER      │  → "John 3:16-18"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → book "John", 3 : 16 - 18
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RANGE           │  → ParsedRange { John, 3:16 ..= 3:18 }
//! │ RESOLUTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXPANSION       │  → [43003016, 43003017, 43003018]
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`abbreviations`] - Abbreviation → canonical book name table
//! - [`normalizer`] - Abbreviation and alias expansion
//! - [`grammar`] - Citation grammar scanner
//! - [`expander`] - Range resolution and verse-id expansion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod abbreviations;
pub mod expander;
pub mod grammar;
pub mod normalizer;

pub use abbreviations::AbbreviationTable;
pub use expander::{ParsedRange, RangeExpander};
pub use grammar::{CitationShape, leading_book_and_chapter, scan};
pub use normalizer::ReferenceNormalizer;
