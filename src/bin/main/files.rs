use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::debug;

/// Raw bytes of a script plus the name the session identifies it by.
#[derive(Debug)]
pub(super) struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Reads `path` whole. Decoding is left to the session so that a bad file
/// never replaces the one being read.
pub(super) fn read_source(path: &Path) -> Result<SourceFile> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    debug!("file: read name={name:?} bytes={}", bytes.len());
    Ok(SourceFile { name, bytes })
}
