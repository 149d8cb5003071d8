//! Friend management.
//!
//! Friends are found by email. A relationship is symmetric: the store writes and
//! removes both directions in one go, so either user can browse the other's
//! catalogue and either can end the friendship.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SendlogError};
use crate::model::{UserId, UserProfile};
use crate::store::DataStore;

pub fn add<S: DataStore>(store: &mut S, viewer: &UserId, email: &str) -> Result<CmdResult> {
    let friend = store.lookup_user_by_email(email)?;
    if &friend.id == viewer {
        return Err(SendlogError::SelfReference(
            "You cannot add yourself as a friend".to_string(),
        ));
    }
    if store.get_friend_relationship(viewer, &friend.id)? {
        return Err(SendlogError::AlreadyFriends);
    }
    store.create_friend_relationship(viewer, &friend.id)?;
    tracing::info!(user = %viewer, friend = %friend.id, "friend added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "You and {} are now friends",
        friend.name
    )));
    Ok(result.with_users(vec![friend]))
}

pub fn remove<S: DataStore>(store: &mut S, viewer: &UserId, email: &str) -> Result<CmdResult> {
    let friend = store.lookup_user_by_email(email)?;
    store.delete_friend_relationship(viewer, &friend.id)?;
    tracing::info!(user = %viewer, friend = %friend.id, "friend removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} from your friends",
        friend.name
    )));
    Ok(result.with_users(vec![friend]))
}

/// The viewer's friends, sorted by name.
pub fn list<S: DataStore>(store: &S, viewer: &UserId) -> Result<CmdResult> {
    let mut friends: Vec<UserProfile> = Vec::new();
    let mut skipped = 0;
    for id in store.list_friend_ids(viewer)? {
        match store.get_user(&id) {
            Ok(profile) => friends.push(profile),
            Err(SendlogError::UserNotFound(_)) => {
                tracing::warn!(friend = %id, "skipping friend without a profile");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    friends.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.email.cmp(&b.email))
    });

    let mut result = CmdResult::default();
    if skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} friend(s) no longer have an account and were skipped",
            skipped
        )));
    }
    if friends.is_empty() {
        result.add_message(CmdMessage::info(
            "No friends yet. Add one with `sendlog friends add <email>`",
        ));
    }
    Ok(result.with_users(friends))
}
