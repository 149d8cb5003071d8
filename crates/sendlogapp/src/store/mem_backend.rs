use super::backend::StorageBackend;
use crate::error::{Result, SendlogError};
use crate::model::{Climb, FriendEdge, UserId, UserProfile};
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since sendlog is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    climbs: RefCell<HashMap<Uuid, Climb>>,
    users: RefCell<HashMap<UserId, UserProfile>>,
    friends: RefCell<Vec<FriendEdge>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    /// While enabled every save fails and leaves the stored documents untouched.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SendlogError::BackendUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_climbs(&self) -> Result<HashMap<Uuid, Climb>> {
        Ok(self.climbs.borrow().clone())
    }

    fn save_climbs(&self, climbs: &HashMap<Uuid, Climb>) -> Result<()> {
        self.check_writable()?;
        *self.climbs.borrow_mut() = climbs.clone();
        Ok(())
    }

    fn load_users(&self) -> Result<HashMap<UserId, UserProfile>> {
        Ok(self.users.borrow().clone())
    }

    fn save_users(&self, users: &HashMap<UserId, UserProfile>) -> Result<()> {
        self.check_writable()?;
        *self.users.borrow_mut() = users.clone();
        Ok(())
    }

    fn load_friends(&self) -> Result<Vec<FriendEdge>> {
        Ok(self.friends.borrow().clone())
    }

    fn save_friends(&self, edges: &[FriendEdge]) -> Result<()> {
        self.check_writable()?;
        *self.friends.borrow_mut() = edges.to_vec();
        Ok(())
    }
}
