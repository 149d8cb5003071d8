use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{Result, SendlogError};
use crate::model::{
    normalize_email, Climb, ClimbFields, ClimbPatch, FriendEdge, UserId, UserProfile,
};
use chrono::Utc;
use uuid::Uuid;

pub struct ClimbStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> ClimbStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: StorageBackend> DataStore for ClimbStore<B> {
    fn load_catalogue(&self, owner: &UserId) -> Result<Vec<Climb>> {
        let climbs = self.backend.load_climbs()?;
        let mut catalogue: Vec<Climb> = climbs
            .into_values()
            .filter(|c| &c.owner_id == owner)
            .collect();
        // Newest first; id breaks ties so the order is stable across loads.
        catalogue.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        tracing::debug!(owner = %owner, count = catalogue.len(), "catalogue loaded");
        Ok(catalogue)
    }

    fn get_climb(&self, id: &Uuid) -> Result<Climb> {
        let climbs = self.backend.load_climbs()?;
        climbs
            .get(id)
            .cloned()
            .ok_or(SendlogError::ClimbNotFound(*id))
    }

    fn create_climb(&mut self, owner: &UserId, fields: ClimbFields) -> Result<Climb> {
        let climb = Climb::new(owner.clone(), fields);

        let mut climbs = self.backend.load_climbs()?;
        climbs.insert(climb.id, climb.clone());
        self.backend.save_climbs(&climbs)?;

        Ok(climb)
    }

    fn update_climb(&mut self, id: &Uuid, patch: ClimbPatch) -> Result<Climb> {
        let mut climbs = self.backend.load_climbs()?;
        let climb = climbs.get_mut(id).ok_or(SendlogError::ClimbNotFound(*id))?;
        patch.apply(climb);
        let updated = climb.clone();
        self.backend.save_climbs(&climbs)?;
        Ok(updated)
    }

    fn delete_climb(&mut self, id: &Uuid) -> Result<()> {
        let mut climbs = self.backend.load_climbs()?;
        if climbs.remove(id).is_none() {
            return Err(SendlogError::ClimbNotFound(*id));
        }
        self.backend.save_climbs(&climbs)?;
        Ok(())
    }

    fn register_user(&mut self, id: &UserId, name: &str, email: &str) -> Result<UserProfile> {
        let profile = UserProfile::new(id.clone(), name, email)?;

        let mut users = self.backend.load_users()?;
        if users.contains_key(id) {
            return Err(SendlogError::AlreadyExists(format!("user {}", id)));
        }
        if users.values().any(|u| u.email == profile.email) {
            return Err(SendlogError::AlreadyExists(format!(
                "an account for {}",
                profile.email
            )));
        }
        users.insert(id.clone(), profile.clone());
        self.backend.save_users(&users)?;
        Ok(profile)
    }

    fn get_user(&self, id: &UserId) -> Result<UserProfile> {
        let users = self.backend.load_users()?;
        users
            .get(id)
            .cloned()
            .ok_or_else(|| SendlogError::UserNotFound(id.to_string()))
    }

    fn lookup_user_by_email(&self, email: &str) -> Result<UserProfile> {
        let wanted = normalize_email(email);
        let users = self.backend.load_users()?;
        users
            .into_values()
            .find(|u| u.email == wanted)
            .ok_or(SendlogError::UserNotFound(wanted))
    }

    fn get_friend_relationship(&self, a: &UserId, b: &UserId) -> Result<bool> {
        let edges = self.backend.load_friends()?;
        Ok(edges.iter().any(|e| e.connects(a, b)))
    }

    fn create_friend_relationship(&mut self, a: &UserId, b: &UserId) -> Result<()> {
        let mut edges = self.backend.load_friends()?;
        // Drop any half-edge left over from older data before writing the pair.
        edges.retain(|e| !e.connects(a, b) && !e.connects(b, a));

        let now = Utc::now();
        edges.push(FriendEdge {
            user: a.clone(),
            friend: b.clone(),
            created_at: now,
        });
        edges.push(FriendEdge {
            user: b.clone(),
            friend: a.clone(),
            created_at: now,
        });
        self.backend.save_friends(&edges)
    }

    fn delete_friend_relationship(&mut self, a: &UserId, b: &UserId) -> Result<()> {
        let mut edges = self.backend.load_friends()?;
        let before = edges.len();
        edges.retain(|e| !e.connects(a, b) && !e.connects(b, a));
        if edges.len() == before {
            return Err(SendlogError::FriendshipNotFound);
        }
        self.backend.save_friends(&edges)
    }

    fn list_friend_ids(&self, user: &UserId) -> Result<Vec<UserId>> {
        let edges = self.backend.load_friends()?;
        Ok(edges
            .into_iter()
            .filter(|e| &e.user == user)
            .map(|e| e.friend)
            .collect())
    }
}
