//! Index build configuration.

use versepage_foundation::DEFAULT_FALLBACK_VERSES;

/// Settings applied while building a [`PageIndex`](crate::PageIndex).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Verse count used for every chapter when no oracle is supplied.
    pub fallback_verses: u32,

    /// Log verses that pick up a second page from a later row.
    pub report_overlaps: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            fallback_verses: DEFAULT_FALLBACK_VERSES,
            report_overlaps: true,
        }
    }
}

impl IndexConfig {
    /// Builder method to set the fallback chapter length.
    #[must_use]
    pub fn with_fallback_verses(mut self, verses: u32) -> Self {
        self.fallback_verses = verses;
        self
    }

    /// Builder method to enable/disable overlap reporting.
    #[must_use]
    pub fn with_report_overlaps(mut self, report: bool) -> Self {
        self.report_overlaps = report;
        self
    }
}
