//! Atomic JSON file operations.
//!
//! Provides a thin layer for safe whole-file access to JSON artifacts. Every
//! read loads the complete document; every write goes through a temporary
//! file, an fsync and an atomic rename, under an exclusive file lock. A crash
//! mid-write can therefore no longer corrupt the artifact.
//!
//! Independent load/save pairs issued by separate processes still race as
//! last-writer-wins; use [`AtomicJsonFile::update`] to make a
//! read-modify-write cycle exclusive.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::JsonError(e) => write!(f, "JSON error: {}", e),
            AtomicJsonError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::JsonError(e)
    }
}

impl From<AtomicJsonError> for finchat_core::FinchatError {
    fn from(e: AtomicJsonError) -> Self {
        match e {
            AtomicJsonError::IoError(io) => io.into(),
            AtomicJsonError::JsonError(json) => json.into(),
            AtomicJsonError::LockError(message) => finchat_core::FinchatError::io(message),
        }
    }
}

/// A handle to a JSON file with atomic whole-file semantics.
///
/// - **Atomicity**: updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: an exclusive file lock serializes `update` cycles
/// - **Durability**: explicit fsync before rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the file atomically.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json_string = serde_json::to_string_pretty(data)?;

        // Write to a temporary file in the same directory, fsync, then
        // rename over the target.
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a read-modify-write cycle under an exclusive lock.
    ///
    /// The update function receives the current data (or `default_value` when
    /// the file is absent) and may modify it; returning `Err` aborts the
    /// cycle without writing.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicJsonError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicJsonError>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicJsonError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|e| {
                AtomicJsonError::LockError(format!("Failed to acquire lock: {}", e))
            })?;
        }

        #[cfg(not(unix))]
        {
            // No advisory locking on non-Unix systems; acceptable for a
            // single-user desktop tool.
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestDoc {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");
        let atomic_file = AtomicJsonFile::<TestDoc>::new(file_path);

        let doc = TestDoc {
            name: "test".to_string(),
            count: 42,
        };

        atomic_file.save(&doc).unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nonexistent.json");
        let atomic_file = AtomicJsonFile::<TestDoc>::new(file_path);

        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_update_creates_then_mutates() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");
        let atomic_file = AtomicJsonFile::<TestDoc>::new(file_path);

        let default_doc = TestDoc {
            name: "default".to_string(),
            count: 0,
        };

        atomic_file
            .update(default_doc.clone(), |doc| {
                doc.count += 10;
                Ok(())
            })
            .unwrap();
        atomic_file
            .update(default_doc, |doc| {
                doc.count += 5;
                Ok(())
            })
            .unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded.count, 15);
    }

    #[test]
    fn test_failed_update_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");
        let atomic_file = AtomicJsonFile::<TestDoc>::new(file_path);

        let doc = TestDoc {
            name: "kept".to_string(),
            count: 1,
        };
        atomic_file.save(&doc).unwrap();

        let result = atomic_file.update(doc.clone(), |inner| {
            inner.count = 99;
            Err(AtomicJsonError::LockError("abort".to_string()))
        });
        assert!(result.is_err());

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");
        let atomic_file = AtomicJsonFile::<TestDoc>::new(file_path.clone());

        let doc = TestDoc {
            name: "test".to_string(),
            count: 42,
        };
        atomic_file.save(&doc).unwrap();

        let tmp_path = temp_dir.path().join(".test.json.tmp");
        assert!(!tmp_path.exists());
        assert!(file_path.exists());
    }
}
