//! # Storage Layer
//!
//! This module defines the storage abstraction for sendlog. The [`DataStore`] trait
//! is everything the core needs from a document database; the rest of the crate
//! never touches persistence directly.
//!
//! ## Two Layers
//!
//! - [`DataStore`]: the "what". Catalogue reads, climb create/update/delete, user
//!   lookup and friend relationships, with the error semantics the commands rely on.
//! - [`backend::StorageBackend`]: the "how". Loading and saving three whole
//!   documents (climbs, users, friends). Implemented by the filesystem and by memory.
//!
//! [`climb_store::ClimbStore`] implements `DataStore` once for any backend.
//!
//! ## Atomicity
//!
//! Every mutation is a read-modify-write of exactly one document, and every backend
//! save replaces the document as a whole. In particular, both halves of a friend
//! relationship live in the same document, so creating or removing a friendship is
//! one write: it either happens completely or not at all.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON documents in a data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── climbs.json     # { climb id: Climb }
//! ├── users.json      # { user id: UserProfile }
//! ├── friends.json    # [ FriendEdge ], two per relationship
//! └── sendlog.toml    # Configuration (optional)
//! ```

use crate::error::Result;
use crate::model::{Climb, ClimbFields, ClimbPatch, UserId, UserProfile};
use uuid::Uuid;

pub mod backend;
pub mod climb_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for climb, user and friendship storage.
///
/// All reads are point-in-time; all writes are atomic per call.
pub trait DataStore {
    /// All climbs owned by `owner`, newest first
    fn load_catalogue(&self, owner: &UserId) -> Result<Vec<Climb>>;

    /// Get a climb by ID
    fn get_climb(&self, id: &Uuid) -> Result<Climb>;

    /// Create a climb owned by `owner`, assigning its id and timestamps.
    /// Fields are stored as given; validation is the caller's job.
    fn create_climb(&mut self, owner: &UserId, fields: ClimbFields) -> Result<Climb>;

    /// Replace the fields present in `patch` and return the stored result
    fn update_climb(&mut self, id: &Uuid, patch: ClimbPatch) -> Result<Climb>;

    /// Delete a climb permanently
    fn delete_climb(&mut self, id: &Uuid) -> Result<()>;

    /// Record a user profile; emails are unique
    fn register_user(&mut self, id: &UserId, name: &str, email: &str) -> Result<UserProfile>;

    /// Get a user profile by ID
    fn get_user(&self, id: &UserId) -> Result<UserProfile>;

    /// Find a user by email (trimmed, case-insensitive)
    fn lookup_user_by_email(&self, email: &str) -> Result<UserProfile>;

    /// Whether `a` has `b` as a friend
    fn get_friend_relationship(&self, a: &UserId, b: &UserId) -> Result<bool>;

    /// Create both directions of a friendship in one write
    fn create_friend_relationship(&mut self, a: &UserId, b: &UserId) -> Result<()>;

    /// Remove both directions of a friendship in one write
    fn delete_friend_relationship(&mut self, a: &UserId, b: &UserId) -> Result<()>;

    /// IDs of everyone `user` is friends with
    fn list_friend_ids(&self, user: &UserId) -> Result<Vec<UserId>>;
}
