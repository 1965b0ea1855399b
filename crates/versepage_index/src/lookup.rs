//! Citation lookup.
//!
//! A lookup normalizes and expands the citation, unions the pages of every
//! verse found in the index, and classifies the result. Failures are values,
//! never panics: every path ends in a [`LookupResult`].

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use versepage_parser::leading_book_and_chapter;

use crate::display::PageDisplay;
use crate::index::PageIndex;

/// Why a lookup produced no pages.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Nothing but whitespace was entered.
    #[error("Please enter a Bible reference.")]
    EmptyInput,

    /// The citation did not parse.
    #[error("Invalid reference format: {0}")]
    InvalidReference(#[source] versepage_foundation::Error),

    /// The citation parsed to an empty range (end before start).
    #[error("No verses parsed from reference.")]
    NoVerses,

    /// None of the cited verses are in the index.
    #[error("All {missing} verse(s) out of range.")]
    AllOutOfRange {
        /// Number of cited verses absent from the index.
        missing: usize,
    },
}

/// Some, but not all, cited verses are missing from the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartialCoverage {
    /// Number of cited verses absent from the index.
    pub missing: usize,
}

impl fmt::Display for PartialCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} verse(s) out of range.", self.missing)
    }
}

impl Serialize for PartialCoverage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Display metadata: the book and first chapter as written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookInfo {
    /// Book name from the normalized citation, or `"Unknown"`.
    pub name: String,
    /// First chapter of the citation, if one could be read.
    pub chapter: Option<u32>,
}

impl BookInfo {
    /// Extracts the leading `Book Chapter` pair of a normalized citation.
    #[must_use]
    pub fn from_reference(reference: &str) -> Self {
        match leading_book_and_chapter(reference) {
            Some((name, chapter)) => Self {
                name: name.to_string(),
                chapter: Some(chapter),
            },
            None => Self {
                name: "Unknown".to_string(),
                chapter: None,
            },
        }
    }
}

/// A successful lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMatch {
    /// The normalized citation.
    pub reference: String,
    /// Distinct pages, ascending.
    pub pages: Vec<u32>,
    /// Pages formatted as `"5"`, `"5-7"` or `"5,7"`.
    #[serde(rename = "page")]
    pub page_display: String,
    /// True when more than one page is involved.
    pub is_range: bool,
    /// Set when some cited verses were not in the index.
    pub warning: Option<PartialCoverage>,
    /// Book and chapter metadata for display.
    pub book_info: BookInfo,
}

impl PageMatch {
    /// First page.
    #[must_use]
    pub fn page_start(&self) -> Option<u32> {
        self.pages.first().copied()
    }

    /// Last page.
    #[must_use]
    pub fn page_end(&self) -> Option<u32> {
        self.pages.last().copied()
    }
}

/// Outcome of a lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupResult {
    /// Pages were found.
    Success(PageMatch),
    /// No pages could be reported.
    Failure(LookupError),
}

impl LookupResult {
    /// Returns true for [`LookupResult::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The match, if the lookup succeeded.
    #[must_use]
    pub fn as_match(&self) -> Option<&PageMatch> {
        match self {
            Self::Success(found) => Some(found),
            Self::Failure(_) => None,
        }
    }

    /// The error, if the lookup failed.
    #[must_use]
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`LookupError`] of a failed lookup.
    pub fn into_result(self) -> Result<PageMatch, LookupError> {
        match self {
            Self::Success(found) => Ok(found),
            Self::Failure(error) => Err(error),
        }
    }
}

impl From<LookupError> for LookupResult {
    fn from(error: LookupError) -> Self {
        Self::Failure(error)
    }
}

/// Looks a raw, user-typed citation up in the index.
#[must_use]
pub fn lookup(index: &PageIndex, raw: &str) -> LookupResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LookupError::EmptyInput.into();
    }

    let reference = index.normalizer().normalize(trimmed);
    let ids = match index.expander().expand(&reference) {
        Ok(ids) => ids,
        Err(error) => return LookupError::InvalidReference(error).into(),
    };
    if ids.is_empty() {
        return LookupError::NoVerses.into();
    }

    let mut pages = BTreeSet::new();
    let mut missing = 0;
    for id in &ids {
        match index.pages_for(*id) {
            Some(found) => pages.extend(found.iter().copied()),
            None => missing += 1,
        }
    }
    debug!(%reference, verses = ids.len(), missing, pages = pages.len(), "lookup");

    let pages: Vec<u32> = pages.into_iter().collect();
    let Some(display) = PageDisplay::classify(&pages) else {
        return LookupError::AllOutOfRange { missing }.into();
    };

    LookupResult::Success(PageMatch {
        book_info: BookInfo::from_reference(&reference),
        reference,
        pages,
        page_display: display.to_string(),
        is_range: display.is_range(),
        warning: (missing > 0).then_some(PartialCoverage { missing }),
    })
}
