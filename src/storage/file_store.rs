//! File-backed key-value store with atomic writes
//!
//! Each key maps to `<data_dir>/<key>.json`. Writes go to a temp file in the
//! same directory, are flushed and synced, then renamed over the target so a
//! crash never leaves a half-written collection behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::kv::KeyValueStore;

/// Key-value store persisting each key as a JSON file in one directory
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `data_dir` (created on first write)
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.path_for(key);
        write_atomic(&path, value)
    }
}

/// Write `contents` to `path` atomically (write to temp, then rename)
fn write_atomic(path: &Path, contents: &str) -> LedgerResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file lives in the same directory so the rename stays atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
