//! File source
//!
//! Reads the whole input file into memory. Any failure to locate or read it
//! is an input error.

use std::fs;
use std::path::Path;

use crate::core::error::{CharFreqError, Result};

/// Read the full content of `path`
pub fn read_content(path: &Path) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|e| {
        CharFreqError::InputArgument(format!("cannot access {}: {}", path.display(), e))
    })?;

    if !metadata.is_file() {
        return Err(CharFreqError::InputArgument(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    let content = fs::read(path).map_err(|e| {
        CharFreqError::InputArgument(format!("cannot read {}: {}", path.display(), e))
    })?;

    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
