//! Verse id → page index.
//!
//! Built once from the dataset: every row's citation is normalized and
//! expanded, and each resulting verse id records the row's page. Rows whose
//! citation cannot be parsed are skipped and reported; they never fail the
//! build.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{info, warn};
use versepage_foundation::{BookTable, ChapterLengths, Error, UniformChapterLength, VerseId};
use versepage_parser::{AbbreviationTable, RangeExpander, ReferenceNormalizer};

use crate::config::IndexConfig;
use crate::entry::PageDataEntry;
use crate::lookup::LookupResult;

/// A dataset row left out of the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    /// Position of the row in the dataset, counting from 1 (a CSV header
    /// is not counted).
    pub row: usize,
    /// Page the row claimed.
    pub page: u32,
    /// Citation as written in the dataset.
    pub reference: String,
    /// Why the citation was rejected.
    pub error: Error,
}

/// Summary of an index build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Rows read from the dataset.
    pub rows: usize,
    /// Rows that contributed verses.
    pub indexed: usize,
    /// Rows skipped because their citation did not parse.
    pub skipped: Vec<SkippedRow>,
    /// Times a verse gained a page beyond the one it already had.
    pub overlaps: usize,
}

impl BuildReport {
    /// Returns true if every row was indexed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Immutable verse id → pages index.
#[derive(Clone, Debug)]
pub struct PageIndex {
    normalizer: ReferenceNormalizer,
    expander: RangeExpander,
    verses: HashMap<VerseId, BTreeSet<u32>>,
    report: BuildReport,
}

impl PageIndex {
    /// Starts configuring a build.
    #[must_use]
    pub fn builder() -> IndexBuilder {
        IndexBuilder::new()
    }

    /// Pages on which a verse appears.
    #[must_use]
    pub fn pages_for(&self, id: VerseId) -> Option<&BTreeSet<u32>> {
        self.verses.get(&id)
    }

    /// Returns true if the verse appears on any page.
    #[must_use]
    pub fn contains(&self, id: VerseId) -> bool {
        self.verses.contains_key(&id)
    }

    /// Number of indexed verses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Returns true if no verses are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Summary of how the index was built.
    #[must_use]
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Normalizer used for both the dataset and lookups.
    #[must_use]
    pub fn normalizer(&self) -> &ReferenceNormalizer {
        &self.normalizer
    }

    /// Expander used for both the dataset and lookups.
    #[must_use]
    pub fn expander(&self) -> &RangeExpander {
        &self.expander
    }

    /// Looks a citation up. See [`crate::lookup()`].
    #[must_use]
    pub fn lookup(&self, raw: &str) -> LookupResult {
        crate::lookup::lookup(self, raw)
    }

    fn record(&mut self, id: VerseId, page: u32, report_overlaps: bool) {
        let pages = self.verses.entry(id).or_default();
        if !pages.is_empty() && !pages.contains(&page) {
            self.report.overlaps += 1;
            if report_overlaps {
                warn!(verse = %id, page, existing = ?pages, "verse appears on several pages");
            }
        }
        pages.insert(page);
    }
}

/// Builds the index over every entry with the given tables.
pub fn build_index<'a>(
    entries: impl IntoIterator<Item = &'a PageDataEntry>,
    abbreviations: AbbreviationTable,
    oracle: Arc<dyn ChapterLengths>,
) -> PageIndex {
    IndexBuilder::new()
        .with_abbreviations(abbreviations)
        .with_oracle(oracle)
        .build(entries)
}

/// Configures and runs an index build.
#[derive(Default)]
pub struct IndexBuilder {
    config: IndexConfig,
    abbreviations: Option<AbbreviationTable>,
    books: Option<BookTable>,
    oracle: Option<Arc<dyn ChapterLengths>>,
}

impl IndexBuilder {
    /// Creates a builder with the standard tables and default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the build configuration.
    #[must_use]
    pub fn with_config(mut self, config: IndexConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the abbreviation table (default: [`AbbreviationTable::standard`]).
    #[must_use]
    pub fn with_abbreviations(mut self, abbreviations: AbbreviationTable) -> Self {
        self.abbreviations = Some(abbreviations);
        self
    }

    /// Sets the book table (default: [`BookTable::canonical`]).
    #[must_use]
    pub fn with_books(mut self, books: BookTable) -> Self {
        self.books = Some(books);
        self
    }

    /// Sets the chapter-length oracle. Without one, every chapter is
    /// [`IndexConfig::fallback_verses`] long.
    #[must_use]
    pub fn with_oracle(mut self, oracle: Arc<dyn ChapterLengths>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Expands every entry and collects the index.
    pub fn build<'a>(self, entries: impl IntoIterator<Item = &'a PageDataEntry>) -> PageIndex {
        let Self {
            config,
            abbreviations,
            books,
            oracle,
        } = self;
        let oracle = oracle
            .unwrap_or_else(|| Arc::new(UniformChapterLength(config.fallback_verses)));

        let mut index = PageIndex {
            normalizer: ReferenceNormalizer::new(Arc::new(
                abbreviations.unwrap_or_else(AbbreviationTable::standard),
            )),
            expander: RangeExpander::new(Arc::new(books.unwrap_or_default()), oracle),
            verses: HashMap::new(),
            report: BuildReport::default(),
        };

        for (i, entry) in entries.into_iter().enumerate() {
            let row = i + 1;
            index.report.rows += 1;
            let reference = index.normalizer.normalize(&entry.reference);
            let ids = match index.expander.expand(&reference) {
                Ok(ids) => ids,
                Err(error) => {
                    warn!(
                        row,
                        page = entry.page,
                        reference = %entry.reference,
                        %error,
                        "skipping invalid ref"
                    );
                    index.report.skipped.push(SkippedRow {
                        row,
                        page: entry.page,
                        reference: entry.reference.clone(),
                        error,
                    });
                    continue;
                }
            };

            for &id in &ids {
                index.record(id, entry.page, config.report_overlaps);
            }

            if entry.spill {
                if let (Some(&last), Some(next)) = (ids.last(), entry.page.checked_add(1)) {
                    index.verses.entry(last).or_default().insert(next);
                }
            }
            index.report.indexed += 1;
        }

        info!(
            rows = index.report.rows,
            indexed = index.report.indexed,
            skipped = index.report.skipped.len(),
            verses = index.verses.len(),
            "page index built"
        );
        index
    }
}
