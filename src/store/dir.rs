//! Directory-backed remote file store
//!
//! Serves objects out of a directory tree, typically a locally synced mirror
//! of the remote account. Store paths are absolute-looking (`/docs/a.txt`)
//! and resolve against the configured root; components that would climb out
//! of the root are rejected.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Component, Path, PathBuf};

use super::{RemoteFileStore, RemoteMetadata, StoreError};

/// Remote file store rooted at a local directory
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store serving the directory at `root`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConnectionError` if the root does not exist or is
    /// not a directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(StoreError::ConnectionError(format!(
                "store root [{}] is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Resolve a store path onto the local root
    ///
    /// Strips the leading separator and rejects parent-directory components,
    /// so every object stays inside the root.
    fn resolve(&self, path: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(path.trim_start_matches('/'));
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(StoreError::OutsideRoot(path.to_string())),
            }
        }
        Ok(self.root.join(relative))
    }
}

impl RemoteFileStore for DirStore {
    fn metadata(&self, path: &str) -> Result<RemoteMetadata, StoreError> {
        let local = self.resolve(path)?;
        match std::fs::metadata(&local) {
            Ok(meta) => Ok(RemoteMetadata {
                path: path.to_string(),
                size_bytes: Some(meta.len()),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(path.to_string()))
            }
            Err(e) => Err(StoreError::IoError(e)),
        }
    }

    fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        let local = self.resolve(path)?;
        let mut file = match File::open(&local) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(path.to_string()));
            }
            Err(e) => return Err(StoreError::IoError(e)),
        };

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }
}
