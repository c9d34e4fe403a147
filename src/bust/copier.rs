//! Byte-for-byte file copy

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::{BustError, BustResult};

/// Stream `source` into `destination`, creating or truncating it.
///
/// Returns the number of bytes written. Both handles are dropped on every
/// path out of this function. A failure partway through leaves whatever was
/// already written in `destination`.
///
/// When `destination` already is `source` (an already busted file run again)
/// nothing is written and the file's length is returned.
pub fn copy_file(source: &Path, destination: &Path) -> BustResult<u64> {
    if same_file(source, destination) {
        return fs::metadata(source)
            .map(|meta| meta.len())
            .map_err(|e| BustError::read(source, e));
    }

    let mut src = File::open(source).map_err(|e| BustError::write(destination, e))?;
    let mut dst = File::create(destination).map_err(|e| BustError::write(destination, e))?;

    io::copy(&mut src, &mut dst).map_err(|e| BustError::write(destination, e))
}

/// Both paths exist and resolve to the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> BustResult<()> {
    fs::create_dir_all(dir).map_err(|e| BustError::write(dir, e))
}
