//! Directory-backed state store persisting each key as a UTF-8 JSON file.

use std::io;

use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::task_list::ports::{StateStore, StateStoreError, StateStoreResult};

/// State store that persists each key as a JSON file inside one directory.
///
/// Access is capability-scoped to the directory handle, so the store can
/// never read or write outside the directory it was opened on.
#[derive(Debug)]
pub struct DirStateStore {
    root: Dir,
}

impl DirStateStore {
    /// Opens a store rooted at an existing directory.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the directory cannot be opened.
    pub fn open(path: &str) -> io::Result<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { root })
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }
}

impl StateStore for DirStateStore {
    fn get(&self, key: &str) -> StateStoreResult<Option<String>> {
        match self.root.read_to_string(Self::file_name(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StateStoreError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StateStoreResult<()> {
        match self.root.write(Self::file_name(key), value) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::StorageFull => {
                Err(StateStoreError::CapacityExceeded(key.to_owned()))
            }
            Err(err) => Err(StateStoreError::backend(err)),
        }
    }
}
