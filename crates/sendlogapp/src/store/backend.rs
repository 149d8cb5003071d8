use crate::error::Result;
use crate::model::{Climb, FriendEdge, UserId, UserProfile};
use std::collections::HashMap;
use uuid::Uuid;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ClimbStore handles the "what" (lookups, ownership, friend pairing).
///
/// Each `save_*` call replaces a whole document and MUST be atomic
/// (e.g. write to tmp then rename): after a failed save the previous
/// document is still intact.
pub trait StorageBackend {
    // --- Climbs ---

    /// Load the climb document (climbs.json)
    fn load_climbs(&self) -> Result<HashMap<Uuid, Climb>>;

    /// Save the climb document
    fn save_climbs(&self, climbs: &HashMap<Uuid, Climb>) -> Result<()>;

    // --- Users ---

    /// Load the user registry (users.json)
    fn load_users(&self) -> Result<HashMap<UserId, UserProfile>>;

    /// Save the user registry
    fn save_users(&self, users: &HashMap<UserId, UserProfile>) -> Result<()>;

    // --- Friendships ---

    /// Load all directed friend edges (friends.json)
    fn load_friends(&self) -> Result<Vec<FriendEdge>>;

    /// Save all directed friend edges
    fn save_friends(&self, edges: &[FriendEdge]) -> Result<()>;
}
