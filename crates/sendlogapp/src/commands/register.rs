use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &UserId, name: &str, email: &str) -> Result<CmdResult> {
    let profile = store.register_user(id, name, email)?;
    tracing::info!(user = %profile.id, "user registered");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Welcome, {} <{}>",
        profile.name, profile.email
    )));
    Ok(result.with_users(vec![profile]))
}

/// Looks up the profile of an already-registered user.
pub fn whoami<S: DataStore>(store: &S, id: &UserId) -> Result<CmdResult> {
    let profile = store.get_user(id)?;
    Ok(CmdResult::default().with_users(vec![profile]))
}
