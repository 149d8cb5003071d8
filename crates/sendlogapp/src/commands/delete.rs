use crate::commands::helpers::owned_climb;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::store::DataStore;
use uuid::Uuid;

/// Permanently removes a climb with its attempts and links.
pub fn run<S: DataStore>(store: &mut S, viewer: &UserId, id: &Uuid) -> Result<CmdResult> {
    let climb = owned_climb(store, viewer, id)?;
    store.delete_climb(id)?;
    tracing::info!(climb = %climb.id, "climb deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Climb deleted: {}", climb.name)));
    Ok(result.with_affected_climb(climb))
}
