//! Verse-to-page index and lookup engine for Versepage.
//!
//! This crate provides:
//! - [`PageDataEntry`] - One dataset row: a page and the citation printed on it
//! - [`PageIndex`] - Verse id → page set index, built once from the dataset
//! - [`LookupResult`] - Outcome of looking a citation up in the index
//! - [`PageDisplay`] - Single page, contiguous run, or scattered pages
//!
//! The index is immutable once built and can be shared across threads
//! without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod display;
pub mod entry;
pub mod index;
pub mod lookup;

pub use config::IndexConfig;
pub use display::PageDisplay;
pub use entry::PageDataEntry;
pub use index::{BuildReport, IndexBuilder, PageIndex, SkippedRow, build_index};
pub use lookup::{BookInfo, LookupError, LookupResult, PageMatch, PartialCoverage, lookup};
