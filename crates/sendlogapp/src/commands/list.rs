use crate::commands::{CatalogueView, CmdResult};
use crate::error::Result;
use crate::filter::{location_options, partition, ClimbFilter};
use crate::model::UserId;
use crate::sharing::Access;
use crate::store::DataStore;

/// Builds the filtered, completion-split view of `owner`'s catalogue.
///
/// Authorization is the caller's job; `access` is recorded on the view as given.
pub(crate) fn catalogue_view<S: DataStore>(
    store: &S,
    owner: &UserId,
    access: Access,
    filter: ClimbFilter,
) -> Result<CatalogueView> {
    let catalogue = store.load_catalogue(owner)?;
    let locations = location_options(&catalogue);
    let climbs = partition(filter.apply(&catalogue));
    Ok(CatalogueView {
        owner: owner.clone(),
        access,
        filter,
        climbs,
        locations,
        total: catalogue.len(),
    })
}

/// Lists the viewer's own catalogue.
pub fn run<S: DataStore>(store: &S, owner: &UserId, filter: ClimbFilter) -> Result<CmdResult> {
    let view = catalogue_view(store, owner, Access::Owner, filter)?;
    Ok(CmdResult::default().with_catalogue(view))
}
