//! Catalog file persistence
//!
//! Saves and loads the catalog as a pretty-printed JSON array, one object
//! per book. Uses atomic writes (write to temp file, then rename) so the
//! catalog file is never left half-written.
//!
//! Storage location: `~/.local/share/shelf/books.json` (configurable via `Config`)

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::models::Book;

use super::error::{StorageError, StorageResult};

/// Persistence layer for the catalog file
pub struct JsonPersistence {
    path: PathBuf,
}

impl JsonPersistence {
    /// Create a persistence handler for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a persistence handler for the configured storage path
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.storage_path.clone())
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the catalog file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all books in file order
    ///
    /// Returns an empty list if the file doesn't exist.
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load(&self) -> StorageResult<Vec<Book>> {
        if !self.exists() {
            debug!("No catalog file at {:?}", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::ReadError {
            path: self.path.clone(),
            source,
        })?;

        let books = decode_books(&content, &self.path)?;
        debug!("Loaded {} book(s) from {:?}", books.len(), self.path);
        Ok(books)
    }

    /// Overwrite the catalog file with the given books
    pub fn save(&self, books: &[Book]) -> StorageResult<()> {
        let bytes = encode_books(books)?;
        atomic_write(&self.path, bytes.as_bytes())?;
        debug!("Saved {} book(s) to {:?}", books.len(), self.path);
        Ok(())
    }
}

/// Serialize books as an indented JSON array with a trailing newline
pub fn encode_books(books: &[Book]) -> StorageResult<String> {
    let mut content = serde_json::to_string_pretty(books)?;
    content.push('\n');
    Ok(content)
}

/// Parse an indented JSON array back into books
pub fn decode_books(content: &str, path: &Path) -> StorageResult<Vec<Book>> {
    let value: Value = serde_json::from_str(content).map_err(|e| StorageError::InvalidFormat {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let Value::Array(records) = value else {
        return Err(StorageError::InvalidFormat {
            path: path.to_path_buf(),
            details: "expected a list of books".to_string(),
        });
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Book::from_value(record).map_err(|source| StorageError::Record {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// The temp file is removed if any step before the rename fails.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    if let Err(e) = write_synced(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::from_io(e, temp_path));
    }

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        StorageError::AtomicWriteFailed {
            from: temp_path.clone(),
            to: path.to_path_buf(),
            source,
        }
    })
}

/// Sibling of `path` with `.tmp` appended to the full file name
///
/// Never equal to `path`, even when `path` itself ends in `.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Create, fill and fsync a file; the handle is closed when this returns
fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}
