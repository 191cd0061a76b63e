//! Directory-backed store.
//!
//! Each key is one `<key>.json` file. Writes go to a hidden temporary file
//! first and are renamed into place, so a crash mid-write leaves either the
//! old value or the new one, never half of each.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

const EXTENSION: &str = "json";

/// A [`KeyValueStore`] persisted as files in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the key files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    key: key.to_owned(),
                    source,
                });
            }
        };

        match String::from_utf8(bytes) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding stored value that is not UTF-8");
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.{EXTENSION}.tmp"));
        let io_err = |source| StorageError::Io {
            key: key.to_owned(),
            source,
        };

        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        remove_if_present(&path).map_err(|source| StorageError::Io {
            key: key.to_owned(),
            source,
        })
    }

    /// Deletes every key file; other files in the directory are left alone.
    fn purge(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            key: self.dir.display().to_string(),
            source,
        };

        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                remove_if_present(&path).map_err(io_err)?;
            }
        }
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("store");
        let store = FileStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        FileStore::open(tmp.path())
            .unwrap()
            .set("demoSmokeCart", "{\"items\":[]}")
            .unwrap();

        let reopened = FileStore::open(tmp.path()).unwrap();
        assert_eq!(
            reopened.get("demoSmokeCart").unwrap().as_deref(),
            Some("{\"items\":[]}")
        );
        assert!(tmp.path().join("demoSmokeCart.json").is_file());
    }

    #[test]
    fn test_missing_key() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
        store.remove("nothing").unwrap();
    }

    #[test]
    fn test_non_utf8_file_reads_as_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        fs::write(tmp.path().join("demoSmokeCart.json"), [0xff, 0xfe, 0x00]).unwrap();

        assert_eq!(store.get("demoSmokeCart").unwrap(), None);

        store.set("demoSmokeCart", "{\"items\":[]}").unwrap();
        assert_eq!(
            store.get("demoSmokeCart").unwrap().as_deref(),
            Some("{\"items\":[]}")
        );
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_purge_removes_only_key_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.set("ageVerified", "true").unwrap();
        fs::write(tmp.path().join("notes.txt"), "keep me").unwrap();

        store.purge().unwrap();

        assert_eq!(store.get("ageVerified").unwrap(), None);
        assert!(tmp.path().join("notes.txt").is_file());
    }
}
