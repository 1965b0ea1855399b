//! Rendering lookup results for the terminal.

use serde_json::{Value, json};
use versepage_index::LookupResult;

/// Terminal output for one lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    /// Line for stdout, if any.
    pub stdout: Option<String>,
    /// Line for stderr, if any: a warning or the failure message.
    pub stderr: Option<String>,
}

/// Renders a result as `"<input> → page 5"` / `"<input> → pages 5-7"`.
#[must_use]
pub fn human(input: &str, result: &LookupResult) -> Rendered {
    match result {
        LookupResult::Success(found) => {
            let noun = if found.is_range { "pages" } else { "page" };
            Rendered {
                stdout: Some(format!("{input} → {noun} {}", found.page_display)),
                stderr: found.warning.map(|w| format!("Warning: {w}")),
            }
        }
        LookupResult::Failure(error) => Rendered {
            stdout: None,
            stderr: Some(error.to_string()),
        },
    }
}

/// Renders a result as a JSON object with a `success` flag.
///
/// A match serializes its own fields and gains `page_start` and `page_end`.
#[must_use]
pub fn to_json(result: &LookupResult) -> Value {
    match result {
        LookupResult::Success(found) => {
            let mut value = json!(found);
            value["success"] = json!(true);
            value["page_start"] = json!(found.page_start());
            value["page_end"] = json!(found.page_end());
            value
        }
        LookupResult::Failure(error) => json!({
            "success": false,
            "error": error.to_string(),
        }),
    }
}
