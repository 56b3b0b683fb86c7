//! JSON report format implementation

use serde_json::{Value as JsonValue, json};

use crate::scan::MatchResult;

use super::format::ReportFormat;

/// JSON reporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport {
    pub print_found: bool,
}

impl ReportFormat for JsonReport {
    fn format_result(&self, result: &MatchResult) -> Option<String> {
        if result.found && !self.print_found {
            return None;
        }
        Some(format_json_entry(result).to_string())
    }
}

/// Generate the JSON object for one result
pub fn format_json_entry(result: &MatchResult) -> JsonValue {
    let mut entry = json!({
        "name": result.signature_name,
        "found": result.found,
        "offset": result.offset,
    });

    if result.occurrences > 1 {
        entry["occurrences"] = json!(result.occurrences);
    }
    if let Some(search) = &result.search {
        entry["search"] = json!(search);
    }

    entry
}
