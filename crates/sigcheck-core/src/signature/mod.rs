//! Byte signatures with wildcard positions.
//!
//! Signatures are written the SourceMod way: a run of `\xNN` escapes where
//! `*` stands for a byte that may hold any value, e.g. `\x55\x8B*\xEC`.
//!
//! # Wildcards and the literal `0x2A`
//!
//! The `*` glyph occupies the same code point as the byte `0x2A`, and gamedata
//! written for SourceMod relies on `\x2A` meaning "any byte". The compiler
//! therefore turns both `*` and `\x2A` into [`ByteDescriptor::Wildcard`]. A
//! signature cannot require a literal `0x2A` byte at any position.

mod compile;
mod matcher;
mod render;

use std::fmt;

use thiserror::Error;

pub use compile::compile;
pub use matcher::{Matches, scan};
pub use render::render;

/// Byte value that doubles as the wildcard marker.
pub const WILDCARD_BYTE: u8 = 0x2A;

/// A single position in a compiled signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteDescriptor {
    /// Haystack byte must equal this value.
    Exact(u8),
    /// Any haystack byte is accepted.
    Wildcard,
}

impl ByteDescriptor {
    pub fn matches(&self, byte: u8) -> bool {
        match self {
            ByteDescriptor::Exact(value) => *value == byte,
            ByteDescriptor::Wildcard => true,
        }
    }
}

/// Compiled signature: an ordered run of byte descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    descriptors: Vec<ByteDescriptor>,
}

impl Pattern {
    pub fn new(descriptors: Vec<ByteDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[ByteDescriptor] {
        &self.descriptors
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.descriptors))
    }
}

/// A named signature together with its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub raw: String,
    pub pattern: Pattern,
}

impl Signature {
    pub fn compile(name: impl Into<String>, raw: impl Into<String>) -> Result<Self, ParseError> {
        let raw = raw.into();
        let pattern = compile(&raw)?;
        Ok(Self {
            name: name.into(),
            raw,
            pattern,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("byte longer than expected: token {token:?} in signature {signature}")]
    MalformedToken { signature: String, token: String },

    #[error("byte was not a number: token {token:?} in signature {signature}")]
    InvalidHex { signature: String, token: String },
}

impl ParseError {
    /// Raw signature text that failed to compile.
    pub fn signature(&self) -> &str {
        match self {
            ParseError::MalformedToken { signature, .. }
            | ParseError::InvalidHex { signature, .. } => signature,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            ParseError::MalformedToken { token, .. } | ParseError::InvalidHex { token, .. } => {
                token
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_compile_keeps_raw_text() {
        let sig = Signature::compile("CBaseEntity::Think", r"\x55\x8B*\xEC").unwrap();
        assert_eq!(sig.name, "CBaseEntity::Think");
        assert_eq!(sig.raw, r"\x55\x8B*\xEC");
        assert_eq!(sig.pattern.len(), sig.raw.replace('*', r"\x2A").len() / 4);
        assert_eq!(sig.pattern.to_string(), "55 8b .. ec");
    }

    #[test]
    fn test_wildcard_accepts_its_own_code_point() {
        assert!(ByteDescriptor::Wildcard.matches(WILDCARD_BYTE));
        assert!(ByteDescriptor::Wildcard.matches(0x00));
        assert!(ByteDescriptor::Exact(0x55).matches(0x55));
        assert!(!ByteDescriptor::Exact(0x55).matches(0x56));
    }

    #[test]
    fn test_parse_error_accessors() {
        let err = compile(r"\x55\x1").unwrap_err();
        assert_eq!(err.signature(), r"\x55\x1");
        assert_eq!(err.token(), "1");
    }
}
