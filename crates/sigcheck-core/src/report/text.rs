//! Plain text report format

use crate::scan::MatchResult;

use super::format::ReportFormat;

#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    pub print_found: bool,
}

impl Default for TextReport {
    fn default() -> Self {
        Self { print_found: true }
    }
}

impl ReportFormat for TextReport {
    fn format_result(&self, result: &MatchResult) -> Option<String> {
        match (result.offset, result.search.as_deref()) {
            (Some(offset), _) => self
                .print_found
                .then(|| format!("{} FOUND@{}", result.signature_name, offset)),
            (None, search) => Some(format!(
                "{} NOT FOUND\n{}",
                result.signature_name,
                search.unwrap_or_default()
            )),
        }
    }
}
