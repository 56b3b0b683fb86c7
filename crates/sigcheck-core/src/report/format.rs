//! ReportFormat trait definition

use crate::scan::MatchResult;

/// Trait for report format implementations
pub trait ReportFormat {
    /// Format a single result, or `None` if the result is not printed
    fn format_result(&self, result: &MatchResult) -> Option<String>;
}
