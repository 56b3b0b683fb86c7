//! Run settings: optional TOML config file merged with command-line flags.
//!
//! ```toml
//! binary = "tf/bin/server.dll"
//! gamedata = "gamedata/sdktools.games.txt"
//! library = "server"
//! platform = "windows"
//! quiet = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sigcheck_core::{
    DEFAULT_LIBRARY, Error, OutputFormat, ParsePolicy, Platform, ScanOptions,
};
use tracing::debug;

/// Settings from any source. Unset fields fall through to the next source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub binary: Option<PathBuf>,
    pub gamedata: Option<PathBuf>,
    pub library: Option<String>,
    pub platform: Option<Platform>,
    pub quiet: Option<bool>,
    pub keep_going: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub binary: PathBuf,
    pub gamedata: PathBuf,
    pub options: ScanOptions,
    pub print_found: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// Load settings from a TOML file. A missing file yields `None`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(settings))
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            binary: overrides.binary.or(self.binary),
            gamedata: overrides.gamedata.or(self.gamedata),
            library: overrides.library.or(self.library),
            platform: overrides.platform.or(self.platform),
            quiet: overrides.quiet.or(self.quiet),
            keep_going: overrides.keep_going.or(self.keep_going),
            format: overrides.format.or(self.format),
        }
    }

    /// Check that every required input is present.
    pub fn resolve(self) -> Result<RunConfig, Error> {
        let mut missing = Vec::new();
        if self.binary.is_none() {
            missing.push("binary (use --dll to specify a dll)");
        }
        if self.gamedata.is_none() {
            missing.push("gamedata (use --gamedata to specify a gamedata file)");
        }

        let (Some(binary), Some(gamedata)) = (self.binary, self.gamedata) else {
            return Err(Error::MissingInput(missing.join(", ")));
        };

        let policy = if self.keep_going.unwrap_or(false) {
            ParsePolicy::Skip
        } else {
            ParsePolicy::Abort
        };

        Ok(RunConfig {
            binary,
            gamedata,
            options: ScanOptions::new()
                .with_library(self.library.unwrap_or_else(|| DEFAULT_LIBRARY.to_string()))
                .with_platform(self.platform.unwrap_or_default())
                .with_parse_policy(policy),
            print_found: !self.quiet.unwrap_or(false),
            format: self.format.unwrap_or_default(),
        })
    }
}
