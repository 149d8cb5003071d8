use crate::commands::helpers::owned_climb;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_fields, ClimbFields, ClimbPatch, UserId};
use crate::store::DataStore;
use uuid::Uuid;

/// Replaces a climb's descriptive fields.
///
/// The grade is re-validated against the (possibly new) discipline. Attempts, links
/// and completion are left alone.
pub fn run<S: DataStore>(
    store: &mut S,
    viewer: &UserId,
    id: &Uuid,
    fields: ClimbFields,
) -> Result<CmdResult> {
    owned_climb(store, viewer, id)?;
    let fields = validate_fields(fields)?;
    let climb = store.update_climb(id, ClimbPatch::default().with_fields(fields))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Climb updated: {}", climb.name)));
    Ok(result.with_affected_climb(climb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{attempts, send};
    use crate::error::SendlogError;
    use crate::model::Discipline;
    use crate::store::memory::fixtures::{StoreFixture, ALEX, SAM};
    use chrono::Utc;

    #[test]
    fn edit_preserves_attempts_and_completion() {
        let mut fixture = StoreFixture::new().with_climb(ALEX, "Roof", Discipline::Boulder, "V4");
        let id = fixture.climb_named(ALEX, "Roof").id;
        let alex = UserId::from(ALEX);
        attempts::add(&mut fixture.store, &alex, &id, Utc::now(), "close").unwrap();
        send::send(&mut fixture.store, &alex, &id, Utc::now(), "").unwrap();

        let fields = ClimbFields::new("Roof Direct", Discipline::Boulder, "V5", "Bishop")
            .with_region("CA");
        let result = run(&mut fixture.store, &alex, &id, fields).unwrap();
        let climb = &result.affected_climbs[0];

        assert_eq!(climb.name, "Roof Direct");
        assert_eq!(climb.region.as_deref(), Some("CA"));
        assert_eq!(climb.attempts.len(), 2);
        assert!(climb.completed);
    }

    #[test]
    fn changing_discipline_revalidates_grade() {
        let mut fixture = StoreFixture::new().with_climb(ALEX, "Roof", Discipline::Boulder, "V4");
        let id = fixture.climb_named(ALEX, "Roof").id;

        let fields = ClimbFields::new("Roof", Discipline::Sport, "V4", "Bishop");
        let err = run(&mut fixture.store, &ALEX.into(), &id, fields).unwrap_err();
        assert!(matches!(err, SendlogError::Grade(_)));
        assert_eq!(
            fixture.store.get_climb(&id).unwrap().discipline,
            Discipline::Boulder
        );
    }

    #[test]
    fn friend_cannot_edit() {
        let mut fixture = StoreFixture::new()
            .with_users()
            .with_friends(ALEX, SAM)
            .with_climb(ALEX, "Roof", Discipline::Boulder, "V4");
        let id = fixture.climb_named(ALEX, "Roof").id;

        let fields = ClimbFields::new("Mine now", Discipline::Boulder, "V4", "Bishop");
        let err = run(&mut fixture.store, &SAM.into(), &id, fields).unwrap_err();
        assert!(matches!(err, SendlogError::Unauthorized(_)));
        assert_eq!(fixture.store.get_climb(&id).unwrap().name, "Roof");
    }
}
