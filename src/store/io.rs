//! Defines file I/O operations

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::StoreError;
use crate::domain::DefineSet;

/// Read a define set from `path`.
///
/// A missing file yields an empty set. Anything else that goes wrong,
/// including content that does not parse, is an error.
pub fn read_define_set(path: &Path) -> Result<DefineSet, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No defines file at {}, starting empty", path.display());
            return Ok(DefineSet::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let defines: DefineSet = toml::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded {} defines from {}", defines.len(), path.display());
    Ok(defines)
}

/// Write a define set to `path` with an exclusive lock and an atomic rename.
///
/// The lock lives in a sibling `.lock` file so the rename never replaces a
/// locked handle. The parent directory is created if needed.
pub fn write_define_set(defines: &DefineSet, path: &Path) -> Result<(), StoreError> {
    write_locked(defines, path).map_err(|source| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Saved {} defines to {}", defines.len(), path.display());
    Ok(())
}

fn write_locked(defines: &DefineSet, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(defines).map_err(io::Error::other)?;

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(sibling(path, "lock"))?;
    lock_file.lock_exclusive()?;

    write_atomic(path, content.as_bytes())?;

    // Lock is released when lock_file is dropped
    Ok(())
}

/// Write `content` to a sibling temp file, sync it, and rename it over `path`.
///
/// Readers see either the old file or the new one, never a truncated one.
/// The parent directory is created if needed.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = sibling(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)
}

/// `defines.toml` -> `defines.toml.<suffix>`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
