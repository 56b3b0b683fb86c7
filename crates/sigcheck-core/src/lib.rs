//! # sigcheck-core
//!
//! Core library for checking gamedata byte signatures against a binary.
//!
//! This crate provides:
//! - Signature compilation (`\x55\x8B*\xEC` style text to byte descriptors)
//! - Wildcard-aware pattern search returning the lowest matching offset
//! - Search string rendering (`55 8b .. ec`) for disassembler tooling
//! - KeyValues gamedata loading and per-library, per-platform filtering
//! - Text and JSON result reports
//!
//! ## Wildcards
//!
//! `*` and `\x2A` both compile to a wildcard. A signature cannot demand a
//! literal `0x2A` byte; this matches how SourceMod gamedata has always been
//! interpreted and existing signatures depend on it.

pub mod error;
pub mod gamedata;
pub mod report;
pub mod scan;
pub mod signature;

pub use error::{Error, Result};
pub use gamedata::{Gamedata, Platform, SignatureEntry};
pub use report::{JsonReport, OutputFormat, ReportFormat, TextReport};
pub use scan::{
    DEFAULT_LIBRARY, MatchResult, ParsePolicy, ScanOptions, ScanReport, Scanner, SkippedSignature,
    applicable,
};
pub use signature::{
    ByteDescriptor, ParseError, Pattern, Signature, compile, render, scan as scan_pattern,
};
