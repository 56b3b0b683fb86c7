use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// Target platform of a signature scan.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    #[default]
    Windows,
    Linux,
}

/// One named record from a gamedata `Signatures` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    pub name: String,
    /// Game section the record was read from.
    pub game: String,
    pub library: String,
    pub windows: Option<String>,
    pub linux: Option<String>,
}

impl SignatureEntry {
    /// Raw signature for `platform`, if the record defines a non-empty one.
    pub fn pattern_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Windows => self.windows.as_deref(),
            Platform::Linux => self.linux.as_deref(),
        }
        .filter(|text| !text.is_empty())
    }

    /// Whether the value for `platform` names a symbol (`@name`) instead of bytes.
    pub fn is_symbol(&self, platform: Platform) -> bool {
        self.pattern_for(platform)
            .is_some_and(|text| text.starts_with('@'))
    }
}
