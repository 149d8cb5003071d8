//! Reading a friend's catalogue and copying climbs out of it.

use crate::commands::list::catalogue_view;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SendlogError};
use crate::filter::ClimbFilter;
use crate::model::{validate_fields, UserId};
use crate::sharing::{authorize_read, copy_fields};
use crate::store::DataStore;
use uuid::Uuid;

/// A friend's catalogue as a read-only view, found by the friend's email.
pub fn browse<S: DataStore>(
    store: &S,
    viewer: &UserId,
    owner_email: &str,
    filter: ClimbFilter,
) -> Result<CmdResult> {
    let owner = store.lookup_user_by_email(owner_email)?;
    let access = authorize_read(store, viewer, &owner.id)?;
    let view = catalogue_view(store, &owner.id, access, filter)?;
    tracing::debug!(viewer = %viewer, owner = %owner.id, "friend catalogue read");
    Ok(CmdResult::default()
        .with_catalogue(view)
        .with_users(vec![owner]))
}

/// Copies a friend's climb into the viewer's own catalogue.
///
/// The copy gets a fresh id and creation time and starts with no attempts, no
/// links and no completion. The source climb is not modified.
pub fn copy<S: DataStore>(store: &mut S, viewer: &UserId, source_id: &Uuid) -> Result<CmdResult> {
    let source = store.get_climb(source_id)?;
    if &source.owner_id == viewer {
        return Err(SendlogError::SelfReference(format!(
            "'{}' is already in your catalogue",
            source.name
        )));
    }
    authorize_read(store, viewer, &source.owner_id)?;

    let fields = validate_fields(copy_fields(&source))?;
    let copy = store.create_climb(viewer, fields)?;
    tracing::info!(source = %source.id, copy = %copy.id, "climb copied");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Copied {} to your climbs",
        copy.name
    )));
    Ok(result.with_affected_climb(copy))
}
