use super::backend::StorageBackend;
use crate::error::{Result, SendlogError};
use crate::model::{Climb, FriendEdge, UserId, UserProfile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const CLIMBS_FILE: &str = "climbs.json";
const USERS_FILE: &str = "users.json";
const FRIENDS_FILE: &str = "friends.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SendlogError::Io)?;
        }
        Ok(())
    }

    fn load_document<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path).map_err(SendlogError::Io)?;
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        let doc = serde_json::from_str(&content).map_err(SendlogError::Serialization)?;
        Ok(doc)
    }

    fn save_document<T: Serialize + ?Sized>(&self, name: &str, doc: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(doc).map_err(SendlogError::Serialization)?;

        // Atomic write; a failed write or rename never leaves the temp file behind.
        let target = self.root.join(name);
        let tmp_file = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        let written = fs::write(&tmp_file, content).and_then(|()| fs::rename(&tmp_file, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(SendlogError::Io(e));
        }
        tracing::trace!(path = %target.display(), "document written");
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_climbs(&self) -> Result<HashMap<Uuid, Climb>> {
        let mut climbs: HashMap<Uuid, Climb> = self.load_document(CLIMBS_FILE)?;
        for climb in climbs.values_mut() {
            climb.repair();
        }
        Ok(climbs)
    }

    fn save_climbs(&self, climbs: &HashMap<Uuid, Climb>) -> Result<()> {
        self.save_document(CLIMBS_FILE, climbs)
    }

    fn load_users(&self) -> Result<HashMap<UserId, UserProfile>> {
        self.load_document(USERS_FILE)
    }

    fn save_users(&self, users: &HashMap<UserId, UserProfile>) -> Result<()> {
        self.save_document(USERS_FILE, users)
    }

    fn load_friends(&self) -> Result<Vec<FriendEdge>> {
        self.load_document(FRIENDS_FILE)
    }

    fn save_friends(&self, edges: &[FriendEdge]) -> Result<()> {
        self.save_document(FRIENDS_FILE, edges)
    }
}
