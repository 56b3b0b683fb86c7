use crate::signature::ParseError;

/// Outcome of searching one signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub signature_name: String,
    pub found: bool,
    pub offset: Option<usize>,
    /// Total number of matching offsets (0 when not found).
    pub occurrences: usize,
    /// Search string for disassembler tooling, set when not found.
    pub search: Option<String>,
}

impl MatchResult {
    pub fn found(name: impl Into<String>, offset: usize, occurrences: usize) -> Self {
        Self {
            signature_name: name.into(),
            found: true,
            offset: Some(offset),
            occurrences,
            search: None,
        }
    }

    pub fn missing(name: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            signature_name: name.into(),
            found: false,
            offset: None,
            occurrences: 0,
            search: Some(search.into()),
        }
    }
}

/// A signature that was left out because its text did not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSignature {
    pub name: String,
    pub error: ParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub results: Vec<MatchResult>,
    pub skipped: Vec<SkippedSignature>,
}

impl ScanReport {
    pub fn found_count(&self) -> usize {
        self.results.iter().filter(|r| r.found).count()
    }

    pub fn missing_count(&self) -> usize {
        self.results.len() - self.found_count()
    }
}
