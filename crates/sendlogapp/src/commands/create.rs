use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_fields, ClimbFields, UserId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, owner: &UserId, fields: ClimbFields) -> Result<CmdResult> {
    let fields = validate_fields(fields)?;
    let climb = store.create_climb(owner, fields)?;
    tracing::debug!(climb = %climb.id, owner = %owner, "climb created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Climb added: {} ({} {})",
        climb.name, climb.discipline, climb.grade
    )));
    Ok(result.with_affected_climb(climb))
}
