use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::Builder;

use crate::StorageError;

/// A single named key holding a single serialized value.
pub trait StorageSlot {
    /// `Ok(None)` when nothing has been stored under the key yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the stored value as a whole.
    fn write(&self, value: &str) -> Result<(), StorageError>;

    fn describe(&self) -> String;
}

/// Slot backed by `{dir}/{key}.json`.
///
/// A write is staged in a hidden temp file beside the slot file and renamed
/// over it, so a reader sees either the previous value or the new one.
pub struct FileSlot {
    dir: PathBuf,
    key: String,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Result<Self, StorageError> {
        validate_key(key)?;
        Ok(Self {
            dir: dir.into(),
            key: key.to_string(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    /// Creates the data directory on first write.
    fn prepare_dir(&self) -> Result<(), StorageError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(StorageError::Directory(format!(
                "{} is not a directory",
                self.dir.display()
            ))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&self.dir).map_err(|e| StorageError::Directory(e.to_string()))
            }
            Err(err) => Err(StorageError::Directory(err.to_string())),
        }
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path()) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        self.prepare_dir()?;

        let mut staged = Builder::new()
            .prefix(&format!(".{}.", self.key))
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;
        staged.write_all(value.as_bytes())?;
        staged.as_file_mut().sync_all()?;
        staged
            .persist(self.path())
            .map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{:?}", self.path())
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':' | '\0'..='\u{1F}'));
    if bad || Path::new(key).components().count() != 1 {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[derive(Debug, Default)]
struct MemoryState {
    value: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory slot. Clones share the same contents, so a second adapter over a
/// clone sees what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.state.borrow_mut().value = Some(value.into());
        slot
    }

    pub fn value(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(StorageError::Unavailable("memory slot read disabled".into()));
        }
        Ok(state.value.clone())
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::Unavailable("memory slot quota exceeded".into()));
        }
        state.value = Some(value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory slot".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::validate_key;

    #[test]
    fn keys_must_be_plain_names() {
        assert!(validate_key("jobApplications").is_ok());
        assert!(validate_key("job-apps.v1").is_ok());
        for bad in ["", ".", "..", "a/b", "a\\b", "c:", "tab\there"] {
            assert!(validate_key(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
