use super::climb_store::ClimbStore;
use super::fs_backend::FsBackend;
use std::path::{Path, PathBuf};

/// Production store: JSON documents in a data directory.
pub type FileStore = ClimbStore<FsBackend>;

impl FileStore {
    pub fn new_fs(root: PathBuf) -> Self {
        ClimbStore::with_backend(FsBackend::new(root))
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.root()
    }
}
