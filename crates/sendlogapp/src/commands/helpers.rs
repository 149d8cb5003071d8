use crate::error::{Result, SendlogError};
use crate::model::{Climb, UserId};
use crate::sharing::ensure_can_mutate;
use crate::store::DataStore;
use uuid::Uuid;

/// Loads a climb the viewer is about to mutate.
pub fn owned_climb<S: DataStore>(store: &S, viewer: &UserId, id: &Uuid) -> Result<Climb> {
    let climb = store.get_climb(id)?;
    ensure_can_mutate(viewer, &climb)?;
    Ok(climb)
}

/// Resolves a full id or a unique id prefix against `owner`'s catalogue.
pub fn resolve_climb_ref<S: DataStore>(store: &S, owner: &UserId, reference: &str) -> Result<Uuid> {
    let reference = reference.trim();
    if let Ok(id) = Uuid::parse_str(reference) {
        return Ok(id);
    }
    if reference.is_empty() {
        return Err(SendlogError::Validation("Climb id is required".to_string()));
    }

    let needle = reference.to_lowercase();
    let matches: Vec<Uuid> = store
        .load_catalogue(owner)?
        .into_iter()
        .map(|c| c.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(SendlogError::Validation(format!(
            "No climb matches '{}'",
            reference
        ))),
        _ => Err(SendlogError::Validation(format!(
            "'{}' matches {} climbs, use a longer prefix",
            reference,
            matches.len()
        ))),
    }
}

/// Resolves an attempt by sequence number (`3` or `#3`), full id or id prefix.
pub fn resolve_attempt_ref(climb: &Climb, reference: &str) -> Result<Uuid> {
    let reference = reference.trim();
    if let Ok(sequence) = reference.trim_start_matches('#').parse::<u32>() {
        return climb
            .attempts
            .iter()
            .find(|a| a.sequence_number == sequence)
            .map(|a| a.id)
            .ok_or_else(|| {
                SendlogError::Validation(format!("{} has no attempt #{}", climb.name, sequence))
            });
    }
    if let Ok(id) = Uuid::parse_str(reference) {
        return Ok(id);
    }

    let needle = reference.to_lowercase();
    let matches: Vec<Uuid> = climb
        .attempts
        .iter()
        .map(|a| a.id)
        .filter(|id| !needle.is_empty() && id.to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        _ => Err(SendlogError::Validation(format!(
            "'{}' does not identify a single attempt",
            reference
        ))),
    }
}
