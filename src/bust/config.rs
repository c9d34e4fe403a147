//! Configuration for a single bust run

use std::path::{Path, PathBuf};

use crate::error::{BustError, BustResult};

/// Immutable settings for one run, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BustConfig {
    /// File to fingerprint
    pub input_file: PathBuf,
    /// Destination directory (default: the source file's directory)
    pub output_dir: Option<PathBuf>,
    /// Name prefix (default: the source file's base name)
    pub prefix: Option<String>,
    /// Leave the prefix off entirely, overriding `prefix`
    pub no_prefix: bool,
    /// Create `output_dir` and its parents before copying
    pub create_dirs: bool,
}

impl BustConfig {
    /// Configuration for `input_file` with every option at its default.
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_dir: None,
            prefix: None,
            no_prefix: false,
            create_dirs: false,
        }
    }

    /// Build from raw option values. Empty strings count as "not given".
    pub fn from_options(
        file: Option<&Path>,
        output_dir: Option<&Path>,
        prefix: Option<&str>,
        no_prefix: bool,
    ) -> BustResult<Self> {
        let input_file = file
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(BustError::MissingInput)?;

        let mut config = Self::new(input_file);
        if let Some(dir) = output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(prefix) = prefix {
            config = config.with_prefix(prefix);
        }
        Ok(config.with_no_prefix(no_prefix))
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.output_dir = (!dir.as_os_str().is_empty()).then_some(dir);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn with_no_prefix(mut self, no_prefix: bool) -> Self {
        self.no_prefix = no_prefix;
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> BustResult<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(BustError::MissingInput);
        }
        Ok(())
    }
}
