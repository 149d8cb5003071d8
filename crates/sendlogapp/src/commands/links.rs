use crate::commands::helpers::owned_climb;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ClimbPatch, Link, UserId};
use crate::store::DataStore;
use uuid::Uuid;

pub fn add<S: DataStore>(
    store: &mut S,
    viewer: &UserId,
    id: &Uuid,
    name: &str,
    url: &str,
) -> Result<CmdResult> {
    let climb = owned_climb(store, viewer, id)?;
    let link = Link::new(name, url)?;

    let mut links = climb.links;
    links.push(link.clone());
    let climb = store.update_climb(id, ClimbPatch::default().with_links(links))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Link added to {}: {}",
        climb.name, link.name
    )));
    Ok(result.with_affected_climb(climb))
}
