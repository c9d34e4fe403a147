//! Output filename derivation
//!
//! The output path depends only on the content digest, the source extension,
//! the prefix policy and the output directory, so an unchanged file always
//! maps to the same name.

use std::path::{Path, PathBuf};

use super::config::BustConfig;
use super::digest::DIGEST_HEX_LEN;
use crate::inspect::PathParts;

/// Separator between prefix and digest
pub const PREFIX_SEPARATOR: &str = "-";

/// Name chosen for the busted copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    /// Lowercase hex content digest
    pub digest: String,
    /// Output file name without directory
    pub file_name: String,
    /// Full output path
    pub path: PathBuf,
}

/// Prefix to put in front of the digest, or `None` when prefixing is off.
pub fn effective_prefix<'a>(config: &'a BustConfig, parts: &'a PathParts) -> Option<&'a str> {
    if config.no_prefix {
        return None;
    }
    match config.prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => Some(prefix),
        _ => Some(parts.base_name.as_str()),
    }
}

/// `[prefix-]digest.ext`
pub fn build_file_name(digest: &str, extension: &str, prefix: Option<&str>) -> String {
    let hashed = format!("{}{}", digest, extension);
    match prefix {
        Some(prefix) => format!("{}{}{}", prefix, PREFIX_SEPARATOR, hashed),
        None => hashed,
    }
}

/// Directory the copy goes to: `output_dir` when given, else the source's own.
pub fn output_directory<'a>(config: &'a BustConfig, parts: &'a PathParts) -> &'a Path {
    match config.output_dir.as_deref() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => parts.directory.as_path(),
    }
}

/// Combine digest, prefix policy and output directory into the final name.
pub fn derive_name(config: &BustConfig, parts: &PathParts, digest: &str) -> DerivedName {
    debug_assert_eq!(digest.len(), DIGEST_HEX_LEN);

    let file_name = build_file_name(digest, &parts.extension, effective_prefix(config, parts));
    let path = output_directory(config, parts).join(&file_name);

    DerivedName {
        digest: digest.to_string(),
        file_name,
        path,
    }
}
