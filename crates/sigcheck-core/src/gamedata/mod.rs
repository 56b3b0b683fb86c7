//! Gamedata loading.
//!
//! Gamedata files are KeyValues text laid out as
//! `Games / <game> / Signatures / <name> / { library, windows, linux }`.
//! Key lookup is ASCII case-insensitive. Objects are kept in sorted key order
//! by the KeyValues parser, so records come out ordered by game and then by
//! signature name.

mod comments;
mod entry;

use std::fs;
use std::path::Path;

use keyvalues_parser::{Obj, Value, Vdf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

pub use comments::strip_comments;
pub use entry::{Platform, SignatureEntry};

const ROOT_KEY: &str = "Games";
const SIGNATURES_KEY: &str = "Signatures";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gamedata {
    entries: Vec<SignatureEntry>,
}

impl Gamedata {
    /// Parse gamedata text, comments included.
    ///
    /// Quoted values are read raw, so backslashes in signature text such as
    /// `\x55\x8B` are kept as written.
    pub fn parse(text: &str) -> Result<Self> {
        let cleaned = strip_comments(text);
        let vdf = Vdf::parse_raw(&cleaned).map_err(|e| Error::Gamedata(e.to_string()))?;
        Ok(Self::from_vdf(&vdf))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let gamedata = Self::parse(&content)?;
        info!(
            "Loaded {} signature entries from {}",
            gamedata.len(),
            path.as_ref().display()
        );
        Ok(gamedata)
    }

    /// Collect signature records from an already parsed KeyValues document.
    pub fn from_vdf(vdf: &Vdf<'_>) -> Self {
        let mut entries = Vec::new();

        let games = match &vdf.value {
            Value::Obj(games) if vdf.key.eq_ignore_ascii_case(ROOT_KEY) => games,
            _ => {
                debug!("Root key '{}' is not a {} section", vdf.key, ROOT_KEY);
                return Self { entries };
            }
        };

        for (game, body) in subsections(games) {
            for signatures in sections(body, SIGNATURES_KEY) {
                for (name, record) in subsections(signatures) {
                    let Some(library) = text(record, "library") else {
                        warn!("Signature '{}' ({}) has no library, skipping", name, game);
                        continue;
                    };
                    entries.push(SignatureEntry {
                        name: name.to_string(),
                        game: game.to_string(),
                        library: library.to_string(),
                        windows: text(record, "windows").map(str::to_string),
                        linux: text(record, "linux").map(str::to_string),
                    });
                }
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every value stored under `key`, duplicates included.
fn values<'o, 'a>(obj: &'o Obj<'a>, key: &'o str) -> impl Iterator<Item = &'o Value<'a>> {
    obj.iter()
        .filter(move |(k, _)| k.eq_ignore_ascii_case(key))
        .flat_map(|(_, values)| values.iter())
}

/// First string value stored under `key`.
fn text<'o>(obj: &'o Obj<'_>, key: &'o str) -> Option<&'o str> {
    values(obj, key).find_map(|value| match value {
        Value::Str(text) => Some(&**text),
        _ => None,
    })
}

fn sections<'o, 'a>(obj: &'o Obj<'a>, key: &'o str) -> impl Iterator<Item = &'o Obj<'a>> {
    values(obj, key).filter_map(|value| match value {
        Value::Obj(inner) => Some(inner),
        _ => None,
    })
}

/// Every `(key, object)` pair, skipping string values.
fn subsections<'o, 'a>(obj: &'o Obj<'a>) -> impl Iterator<Item = (&'o str, &'o Obj<'a>)> {
    obj.iter().flat_map(|(key, values)| {
        values.iter().filter_map(move |value| match value {
            Value::Obj(inner) => Some((&**key, inner)),
            _ => None,
        })
    })
}
