//! Dataset rows.

use serde::Deserialize;

/// One row of the page-data dataset.
///
/// `spill` marks a page whose final cited verse continues onto `page + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageDataEntry {
    /// Printed page number.
    pub page: u32,
    /// Citation covering the page, in the same grammar users type.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Whether the last verse spills onto the next page.
    #[serde(default)]
    pub spill: bool,
}

impl PageDataEntry {
    /// Creates a row without spillover.
    #[must_use]
    pub fn new(page: u32, reference: impl Into<String>) -> Self {
        Self {
            page,
            reference: reference.into(),
            spill: false,
        }
    }

    /// Marks the row as spilling onto the next page.
    #[must_use]
    pub fn spilling(mut self) -> Self {
        self.spill = true;
        self
    }
}
