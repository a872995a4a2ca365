//! Bearer token persisted in a plain file between CLI runs.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use pressdesk_shared::{StorageError, TokenStore};

/// Token kept in a single file. Parent directories are created on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store backed by `path`; nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Location of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw.trim().to_string()).filter(|token| !token.is_empty()),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read token file");
                None
            },
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError(e.to_string()))?;
        }
        fs::write(&self.path, token).map_err(|e| StorageError(e.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear_cycle() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FileTokenStore::new(dir.path().join("nested/token"));

        assert_eq!(store.load(), None);
        store.save("tok-1").expect("save token");
        assert_eq!(store.load().as_deref(), Some("tok-1"));

        store.clear().expect("clear token");
        assert_eq!(store.load(), None);
        store.clear().expect("clearing a missing token succeeds");
    }

    #[test]
    fn blank_file_counts_as_no_token() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("token");
        fs::write(&path, "  \n").expect("write blank token");
        assert_eq!(FileTokenStore::new(path).load(), None);
    }
}
