//! Content hashing

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::{BustError, BustResult};

/// Length of a rendered digest in hex characters
pub const DIGEST_HEX_LEN: usize = 32;

/// MD5 of `bytes` as 32 lowercase hex characters.
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// MD5 of everything `reader` yields.
pub fn digest_reader<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Md5::new();
    io::copy(reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// MD5 of the file at `path`, bytes taken exactly as stored.
pub fn digest_file(path: &Path) -> BustResult<String> {
    let mut file = File::open(path).map_err(|e| BustError::read(path, e))?;
    digest_reader(&mut file).map_err(|e| BustError::read(path, e))
}
