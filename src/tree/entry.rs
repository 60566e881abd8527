//! Directory listing shared by both walkers

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;

/// One listed item of a directory, read fresh at traversal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Base name, lossily converted for display
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Byte size; always 0 for directories
    pub size: u64,
}

/// Read, filter, and sort the immediate children of `dir`.
///
/// Any failure to open or iterate the directory is a `TreeError::Read` for
/// `dir`. Failing to stat a single entry is not: its type falls back to
/// non-directory and its size to 0.
pub fn read_entries(dir: &Path, config: &WalkerConfig) -> Result<Vec<DirEntryInfo>> {
    let read_dir = fs::read_dir(dir).map_err(|e| TreeError::read(dir, e))?;

    let mut entries: Vec<(OsString, DirEntryInfo)> = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| TreeError::read(dir, e))?;
        let path = entry.path();

        // file_type() does not follow symlinks
        let is_dir = match entry.file_type() {
            Ok(t) => t.is_dir(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot determine entry type");
                false
            }
        };

        if !is_dir && !config.include_files {
            continue;
        }

        let size = if is_dir {
            0
        } else {
            match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot read entry size");
                    0
                }
            }
        };

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().to_string();
        entries.push((
            file_name,
            DirEntryInfo {
                name,
                path,
                is_dir,
                size,
            },
        ));
    }

    // Byte-wise on the raw name, not on the lossy display form
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    debug!(dir = %dir.display(), count = entries.len(), "listed directory");

    Ok(entries.into_iter().map(|(_, info)| info).collect())
}
