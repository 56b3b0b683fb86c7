//! Result presentation.
//!
//! The text format is line-compatible with existing tooling: found
//! signatures print as `<name> FOUND@<offset>`, missing ones as
//! `<name> NOT FOUND` followed by a search string for a disassembler.

mod format;
mod json;
mod text;

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

pub use format::ReportFormat;
pub use json::JsonReport;
pub use text::TextReport;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter for this output format. Found signatures are omitted unless
    /// `print_found` is set.
    pub fn formatter(self, print_found: bool) -> Box<dyn ReportFormat> {
        match self {
            OutputFormat::Text => Box::new(TextReport { print_found }),
            OutputFormat::Json => Box::new(JsonReport { print_found }),
        }
    }
}
