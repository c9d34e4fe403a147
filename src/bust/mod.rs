//! Cache-busting pipeline
//!
//! Inspect the source, hash it, derive the output name, copy. Each stage
//! returns a [`BustResult`] and the first failure stops the run.

pub mod config;
pub mod copier;
pub mod digest;
pub mod naming;

use std::path::Path;

pub use config::BustConfig;
pub use naming::DerivedName;

use crate::error::BustResult;
use crate::inspect::{inspect, PathParts};

/// Everything decided before any byte is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BustPlan {
    pub source: PathParts,
    pub derived: DerivedName,
    pub create_dirs: bool,
}

/// Result of a completed copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BustOutcome {
    pub source: PathParts,
    pub derived: DerivedName,
    pub bytes_written: u64,
}

impl BustOutcome {
    /// Output file name without directory
    pub fn file_name(&self) -> &str {
        &self.derived.file_name
    }

    pub fn path(&self) -> &Path {
        &self.derived.path
    }
}

/// Inspect and hash the source and work out where the copy goes.
pub fn plan(config: &BustConfig) -> BustResult<BustPlan> {
    config.validate()?;

    let source = inspect(&config.input_file)?;
    let digest = digest::digest_file(&source.absolute_path)?;
    let derived = naming::derive_name(config, &source, &digest);

    Ok(BustPlan {
        source,
        derived,
        create_dirs: config.create_dirs,
    })
}

impl BustPlan {
    /// Copy the source to the derived path.
    pub fn execute(self) -> BustResult<BustOutcome> {
        if self.create_dirs {
            if let Some(parent) = self.derived.path.parent() {
                copier::ensure_dir(parent)?;
            }
        }

        let bytes_written = copier::copy_file(&self.source.absolute_path, &self.derived.path)?;

        Ok(BustOutcome {
            source: self.source,
            derived: self.derived,
            bytes_written,
        })
    }
}

/// Run the whole pipeline for `config`.
pub fn bust(config: &BustConfig) -> BustResult<BustOutcome> {
    plan(config)?.execute()
}
