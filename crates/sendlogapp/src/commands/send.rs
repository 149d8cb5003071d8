//! Send and unsend, persisted as a single patch.
//!
//! Each command runs the transition on a loaded copy of the climb and writes back
//! the attempt list, the sequence counter and the completion stamp together. If
//! that write fails the stored climb is exactly what it was before.

use crate::commands::helpers::owned_climb;
use crate::commands::{CmdMessage, CmdResult};
use crate::completion;
use crate::error::Result;
use crate::model::{ClimbPatch, UserId};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub fn send<S: DataStore>(
    store: &mut S,
    viewer: &UserId,
    id: &Uuid,
    date: DateTime<Utc>,
    notes: &str,
) -> Result<CmdResult> {
    let mut climb = owned_climb(store, viewer, id)?;
    let attempt = completion::send(&mut climb, date, notes)?;
    let patch = ClimbPatch::default()
        .with_attempts_of(&climb)
        .with_completion(climb.completed_at);
    let climb = store.update_climb(id, patch)?;
    tracing::info!(climb = %climb.id, "climb sent");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sent it! {} ({}) on attempt #{}",
        climb.name, climb.grade, attempt.sequence_number
    )));
    result.attempts.push(attempt);
    Ok(result.with_affected_climb(climb))
}

pub fn unsend<S: DataStore>(store: &mut S, viewer: &UserId, id: &Uuid) -> Result<CmdResult> {
    let mut climb = owned_climb(store, viewer, id)?;
    let removed = completion::unsend(&mut climb)?;
    let patch = ClimbPatch::default()
        .with_attempts_of(&climb)
        .with_completion(None);
    let climb = store.update_climb(id, patch)?;
    tracing::info!(climb = %climb.id, removed = removed.len(), "climb unsent");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} is back on the project list",
        climb.name
    )));
    if removed.len() > 1 {
        result.add_message(CmdMessage::info(format!(
            "Removed {} send attempts",
            removed.len()
        )));
    }
    result.attempts = removed;
    Ok(result.with_affected_climb(climb))
}
