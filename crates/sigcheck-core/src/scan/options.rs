use strum::{AsRefStr, Display, EnumString};

use crate::gamedata::Platform;

/// Library scanned when none is given.
pub const DEFAULT_LIBRARY: &str = "server";

/// What to do when a signature fails to compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ParsePolicy {
    /// Stop the run at the first bad signature.
    #[default]
    Abort,
    /// Report the bad signature and continue with the rest.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub library: String,
    pub platform: Platform,
    pub on_parse_error: ParsePolicy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            library: DEFAULT_LIBRARY.to_string(),
            platform: Platform::default(),
            on_parse_error: ParsePolicy::default(),
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.on_parse_error = policy;
        self
    }
}
