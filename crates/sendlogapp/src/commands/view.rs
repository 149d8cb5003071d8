use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::UserId;
use crate::sharing::authorize_read;
use crate::store::DataStore;
use uuid::Uuid;

/// Loads one climb for display. Friends of the owner may view it read-only.
pub fn run<S: DataStore>(store: &S, viewer: &UserId, id: &Uuid) -> Result<CmdResult> {
    let climb = store.get_climb(id)?;
    authorize_read(store, viewer, &climb.owner_id)?;
    Ok(CmdResult::default().with_affected_climb(climb))
}
