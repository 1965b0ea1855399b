//! Page-data dataset loading.
//!
//! Two formats are accepted, chosen by file extension:
//! - `.json`: an array of `{"page": 12, "ref": "John 3:16-18", "spill": true}`
//! - anything else: CSV with a `page,ref[,spill]` header
//!
//! The CSV `spill` column is optional; `1`, `true`, `yes` and `y` (any case)
//! mark a spilling row, every other value does not.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use versepage_foundation::{Error, ErrorContext, Result};
use versepage_index::PageDataEntry;

#[derive(Debug, Deserialize)]
struct CsvRow {
    page: u32,
    #[serde(rename = "ref")]
    reference: String,
    #[serde(default)]
    spill: Option<String>,
}

/// Returns true for the spill-column values that mean "yes".
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

/// Loads the dataset at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be decoded.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<PageDataEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open dataset '{}': {e}", path.display()))
    })?;
    let reader = BufReader::new(file);
    let source = path.display().to_string();

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let entries = if is_json {
        read_json(reader, &source)?
    } else {
        read_csv(reader, &source)?
    };

    info!(path = %source, rows = entries.len(), "dataset loaded");
    Ok(entries)
}

/// Reads CSV rows with a `page,ref[,spill]` header.
///
/// # Errors
///
/// Returns a dataset error naming the first row that fails to decode.
pub fn read_csv<R: Read>(reader: R, source: &str) -> Result<Vec<PageDataEntry>> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (i, row) in csv.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|e| {
            Error::dataset(format!("{source}: row {}: {e}", i + 1))
                .with_context(ErrorContext::new().with_source(source).with_row(i + 1))
        })?;
        entries.push(PageDataEntry {
            page: row.page,
            reference: row.reference,
            spill: row.spill.as_deref().is_some_and(is_truthy),
        });
    }
    Ok(entries)
}

/// Reads a JSON array of dataset rows.
///
/// # Errors
///
/// Returns a dataset error if the document is not an array of rows.
pub fn read_json<R: Read>(reader: R, source: &str) -> Result<Vec<PageDataEntry>> {
    serde_json::from_reader(reader).map_err(|e| {
        Error::dataset(format!("{source}: {e}"))
            .with_context(ErrorContext::new().with_source(source))
    })
}
