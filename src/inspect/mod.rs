//! Source path inspection
//!
//! Confirms the input exists and splits its absolute path into the pieces the
//! filename deriver needs.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{BustError, BustResult};

/// Decomposed source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Absolute, lexically cleaned path of the source file
    pub absolute_path: PathBuf,
    /// Directory containing the source file
    pub directory: PathBuf,
    /// File name with the extension removed
    pub base_name: String,
    /// Extension including the leading dot, or empty
    pub extension: String,
}

impl PathParts {
    /// Final path segment (`base_name + extension`)
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }
}

/// Check that `file` exists and decompose it into [`PathParts`].
pub fn inspect(file: &Path) -> BustResult<PathParts> {
    if std::fs::metadata(file).is_err() {
        return Err(BustError::not_found(file));
    }

    let cwd = env::current_dir().map_err(|e| BustError::read(file, e))?;
    let absolute_path = absolutize(&cwd, file);
    split(file, absolute_path)
}

fn split(original: &Path, absolute_path: PathBuf) -> BustResult<PathParts> {
    let name = absolute_path
        .file_name()
        .ok_or_else(|| BustError::invalid_input(original, "path has no file name"))?
        .to_str()
        .ok_or_else(|| BustError::invalid_input(original, "file name is not valid UTF-8"))?
        .to_string();

    let directory = absolute_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| absolute_path.clone());

    let extension = extension_of(&name).to_string();
    let base_name = name
        .strip_suffix(extension.as_str())
        .unwrap_or(&name)
        .to_string();

    Ok(PathParts {
        absolute_path,
        directory,
        base_name,
        extension,
    })
}

/// Everything from the last dot of `name` on, or "" when there is no dot.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map(|idx| &name[idx..]).unwrap_or("")
}

/// Join `path` onto `cwd` when relative and drop `.`/`..` segments lexically.
/// Symlinks are left alone.
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // ".." above the root stays at the root
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
