//! Reference normalization.
//!
//! Rewrites the leading book token of a citation to its canonical name:
//! "Gen 1:1" becomes "Genesis 1:1" and "Song of Solomon 2:1" becomes
//! "Song of Songs 2:1". Anything unrecognized passes through untouched.

use std::sync::Arc;

use crate::abbreviations::AbbreviationTable;

/// Multi-word alias handled ahead of the token lookup.
const SONG_ALIAS: &str = "Song of Solomon";
const SONG_CANONICAL: &str = "Song of Songs";

/// Expands abbreviations and aliases into canonical book names.
#[derive(Clone, Debug)]
pub struct ReferenceNormalizer {
    abbreviations: Arc<AbbreviationTable>,
}

impl ReferenceNormalizer {
    /// Creates a normalizer over the given abbreviation table.
    #[must_use]
    pub fn new(abbreviations: Arc<AbbreviationTable>) -> Self {
        Self { abbreviations }
    }

    /// Returns the abbreviation table in use.
    #[must_use]
    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    /// Normalizes a citation.
    ///
    /// Only the first space-separated token is looked up. The input is
    /// trimmed before splitting; when no abbreviation matches, the untrimmed
    /// input is returned as-is.
    #[must_use]
    pub fn normalize(&self, input: &str) -> String {
        if let Some(rest) = input.strip_prefix(SONG_ALIAS) {
            return format!("{SONG_CANONICAL}{rest}");
        }

        let trimmed = input.trim();
        // Already canonical; "Song" would otherwise expand again.
        if trimmed.starts_with(SONG_CANONICAL) {
            return input.to_string();
        }
        let (token, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        match self.abbreviations.get(token) {
            Some(full) if rest.is_empty() => full.to_string(),
            Some(full) => format!("{full} {rest}"),
            None => input.to_string(),
        }
    }
}

impl Default for ReferenceNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(AbbreviationTable::standard()))
    }
}
