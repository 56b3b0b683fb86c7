//! Signature scanning over a loaded binary.
//!
//! Entries are filtered by library and platform, compiled, searched and
//! reported in gamedata order. The binary is only ever borrowed immutably.

mod options;
mod result;

use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::gamedata::SignatureEntry;
use crate::signature::{Matches, Signature};

pub use options::{DEFAULT_LIBRARY, ParsePolicy, ScanOptions};
pub use result::{MatchResult, ScanReport, SkippedSignature};

/// Entries that carry a byte signature for the requested library and platform,
/// paired with that signature's raw text.
pub fn applicable<'e, I>(
    entries: I,
    options: &ScanOptions,
) -> impl Iterator<Item = (&'e SignatureEntry, &'e str)>
where
    I: IntoIterator<Item = &'e SignatureEntry>,
{
    let platform = options.platform;
    let library = options.library.clone();

    entries
        .into_iter()
        .filter(move |entry| entry.library == library)
        .filter(move |entry| {
            if entry.is_symbol(platform) {
                debug!("{}: {} value is a symbol, skipping", entry.name, platform);
                return false;
            }
            true
        })
        .filter_map(move |entry| entry.pattern_for(platform).map(|raw| (entry, raw)))
}

pub struct Scanner<'a> {
    binary: &'a [u8],
    options: &'a ScanOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(binary: &'a [u8], options: &'a ScanOptions) -> Self {
        Self { binary, options }
    }

    /// Search the binary for one compiled signature.
    pub fn scan_signature(&self, signature: &Signature) -> MatchResult {
        let mut matches = Matches::new(self.binary, signature.pattern.descriptors());

        match matches.next() {
            Some(offset) => {
                let occurrences = 1 + matches.count();
                if occurrences > 1 {
                    warn!(
                        "{} matches {} locations, reporting the first",
                        signature.name, occurrences
                    );
                }
                MatchResult::found(&signature.name, offset, occurrences)
            }
            None => MatchResult::missing(&signature.name, signature.pattern.to_string()),
        }
    }

    pub fn run<'e, I>(&self, entries: I) -> Result<ScanReport>
    where
        I: IntoIterator<Item = &'e SignatureEntry>,
    {
        self.run_with(entries, |_| {})
    }

    /// Like [`Scanner::run`], handing each result to `on_result` as soon as
    /// it is produced.
    pub fn run_with<'e, I, F>(&self, entries: I, mut on_result: F) -> Result<ScanReport>
    where
        I: IntoIterator<Item = &'e SignatureEntry>,
        F: FnMut(&MatchResult),
    {
        debug!(
            "Scanning {} bytes for library '{}' ({})",
            self.binary.len(),
            self.options.library,
            self.options.platform
        );

        let mut report = ScanReport::default();

        for (entry, raw) in applicable(entries, self.options) {
            let signature = match Signature::compile(&entry.name, raw) {
                Ok(signature) => signature,
                Err(e) => {
                    error!("{}: {}", entry.name, raw);
                    match self.options.on_parse_error {
                        ParsePolicy::Abort => return Err(e.into()),
                        ParsePolicy::Skip => {
                            warn!("Skipping {}: {}", entry.name, e);
                            report.skipped.push(SkippedSignature {
                                name: entry.name.clone(),
                                error: e,
                            });
                            continue;
                        }
                    }
                }
            };

            let result = self.scan_signature(&signature);
            debug!(
                "  {}: {}",
                result.signature_name,
                result
                    .offset
                    .map_or_else(|| "not found".to_string(), |o| format!("0x{:X}", o))
            );
            on_result(&result);
            report.results.push(result);
        }

        info!(
            "Scanned {} signatures: {} found, {} missing, {} skipped",
            report.results.len() + report.skipped.len(),
            report.found_count(),
            report.missing_count(),
            report.skipped.len()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gamedata::{Gamedata, Platform};
    use crate::signature::ParseError;

    fn entry(
        name: &str,
        library: &str,
        windows: Option<&str>,
        linux: Option<&str>,
    ) -> SignatureEntry {
        SignatureEntry {
            name: name.to_string(),
            game: "tf".to_string(),
            library: library.to_string(),
            windows: windows.map(str::to_string),
            linux: linux.map(str::to_string),
        }
    }

    const BINARY: [u8; 6] = [0x10, 0x55, 0x8B, 0x2A, 0xEC, 0x99];

    #[test]
    fn test_applicable_filters_library_and_platform() {
        let entries = vec![
            entry("a", "server", Some(r"\x55"), None),
            entry("b", "engine", Some(r"\x55"), None),
            entry("c", "server", None, Some(r"\x55")),
            entry("d", "server", Some(""), None),
            entry("e", "server", Some(r"\x8B"), Some("@sym")),
        ];

        let windows = ScanOptions::default();
        let names: Vec<_> = applicable(&entries, &windows)
            .map(|(e, _)| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "e"]);

        let linux = ScanOptions::default().with_platform(Platform::Linux);
        let names: Vec<_> = applicable(&entries, &linux)
            .map(|(e, _)| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["c"]);

        let engine = ScanOptions::default().with_library("engine");
        let names: Vec<_> = applicable(&entries, &engine)
            .map(|(e, _)| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["b"]);
    }

    #[test]
    fn test_run_reports_found_and_missing() {
        let entries = vec![
            entry("Think", "server", Some(r"\x55\x8B*\xEC"), None),
            entry("Missing", "server", Some(r"\xDE\xAD*"), None),
            entry("LinuxOnly", "server", None, Some(r"\x55")),
        ];
        let options = ScanOptions::default();
        let report = Scanner::new(&BINARY, &options).run(&entries).unwrap();

        assert_eq!(
            report.results,
            vec![
                MatchResult::found("Think", 1, 1),
                MatchResult::missing("Missing", "de ad .."),
            ]
        );
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_run_counts_occurrences() {
        let binary = [0xCC, 0x90, 0xCC, 0x90, 0xCC];
        let entries = vec![entry("Pad", "server", Some(r"\xCC\x90"), None)];
        let options = ScanOptions::default();
        let report = Scanner::new(&binary, &options).run(&entries).unwrap();
        assert_eq!(report.results[0].offset, Some(0));
        assert_eq!(report.results[0].occurrences, 2);
    }

    #[test]
    fn test_run_aborts_on_bad_signature() {
        let entries = vec![
            entry("Good", "server", Some(r"\x55"), None),
            entry("Bad", "server", Some(r"\xZZ"), None),
            entry("Later", "server", Some(r"\x8B"), None),
        ];
        let options = ScanOptions::default();

        let mut seen = Vec::new();
        let err = Scanner::new(&BINARY, &options)
            .run_with(&entries, |r| seen.push(r.signature_name.clone()))
            .unwrap_err();

        assert!(matches!(err, Error::Signature(ParseError::InvalidHex { .. })));
        assert_eq!(err.offending_signature(), Some(r"\xZZ"));
        assert_eq!(seen, vec!["Good"]);
    }

    #[test]
    fn test_run_skips_bad_signature_when_asked() {
        let entries = vec![
            entry("Bad", "server", Some(r"\x1"), None),
            entry("Later", "server", Some(r"\x8B"), None),
        ];
        let options = ScanOptions::default().with_parse_policy(ParsePolicy::Skip);
        let report = Scanner::new(&BINARY, &options).run(&entries).unwrap();

        assert_eq!(report.results, vec![MatchResult::found("Later", 2, 1)]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "Bad");
        assert_eq!(report.skipped[0].error.signature(), r"\x1");
    }

    #[test]
    fn test_run_from_gamedata_text() {
        let gamedata = Gamedata::parse(
            r#"
            "Games"
            {
                "tf"
                {
                    "Signatures"
                    {
                        /* wildcard over the 0x2A byte */
                        "Think"
                        {
                            "library"   "server"
                            "windows"   "\x55\x8B\x2A\xEC"
                            "linux"     "@_ZN11CBaseEntity5ThinkEv"
                        }
                    }
                }
            }
            "#,
        )
        .unwrap();

        let options = ScanOptions::default();
        let report = Scanner::new(&BINARY, &options).run(gamedata.entries()).unwrap();
        assert_eq!(report.results, vec![MatchResult::found("Think", 1, 1)]);

        let linux = ScanOptions::default().with_platform(Platform::Linux);
        let report = Scanner::new(&BINARY, &linux).run(gamedata.entries()).unwrap();
        assert!(report.results.is_empty());
    }
}
