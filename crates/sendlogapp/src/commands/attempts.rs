use crate::commands::helpers::owned_climb;
use crate::commands::{CmdMessage, CmdResult};
use crate::completion;
use crate::error::Result;
use crate::model::{ClimbPatch, UserId};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Logs a regular attempt on one of the viewer's climbs.
pub fn add<S: DataStore>(
    store: &mut S,
    viewer: &UserId,
    id: &Uuid,
    date: DateTime<Utc>,
    notes: &str,
) -> Result<CmdResult> {
    let mut climb = owned_climb(store, viewer, id)?;
    let attempt = completion::add_attempt(&mut climb, date, notes);
    let climb = store.update_climb(id, ClimbPatch::default().with_attempts_of(&climb))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Attempt #{} logged on {}",
        attempt.sequence_number, climb.name
    )));
    result.attempts.push(attempt);
    Ok(result.with_affected_climb(climb))
}

pub fn edit_notes<S: DataStore>(
    store: &mut S,
    viewer: &UserId,
    id: &Uuid,
    attempt_id: &Uuid,
    notes: &str,
) -> Result<CmdResult> {
    let mut climb = owned_climb(store, viewer, id)?;
    let attempt = completion::edit_attempt_notes(&mut climb, attempt_id, notes)?;
    let climb = store.update_climb(id, ClimbPatch::default().with_attempts_of(&climb))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Notes updated for attempt #{}",
        attempt.sequence_number
    )));
    result.attempts.push(attempt);
    Ok(result.with_affected_climb(climb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SendlogError;
    use crate::model::Discipline;
    use crate::store::memory::fixtures::{StoreFixture, ALEX, SAM};

    fn fixture() -> (StoreFixture, Uuid) {
        let fixture = StoreFixture::new()
            .with_users()
            .with_friends(ALEX, SAM)
            .with_climb(ALEX, "Slab", Discipline::Sport, "18");
        let id = fixture.climb_named(ALEX, "Slab").id;
        (fixture, id)
    }

    #[test]
    fn attempts_get_increasing_sequence_numbers() {
        let (mut fixture, id) = fixture();
        let alex = UserId::from(ALEX);
        add(&mut fixture.store, &alex, &id, Utc::now(), "flash go").unwrap();
        let second = add(&mut fixture.store, &alex, &id, Utc::now(), " fell at crux ").unwrap();

        assert_eq!(second.attempts[0].sequence_number, 2);
        assert_eq!(second.attempts[0].notes, "fell at crux");
        let stored = fixture.store.get_climb(&id).unwrap();
        assert_eq!(stored.attempts.len(), 2);
        assert!(!stored.completed);
    }

    #[test]
    fn edit_notes_only_changes_that_attempt() {
        let (mut fixture, id) = fixture();
        let alex = UserId::from(ALEX);
        let first = add(&mut fixture.store, &alex, &id, Utc::now(), "one").unwrap().attempts[0].clone();
        add(&mut fixture.store, &alex, &id, Utc::now(), "two").unwrap();

        edit_notes(&mut fixture.store, &alex, &id, &first.id, "one, revised").unwrap();

        let stored = fixture.store.get_climb(&id).unwrap();
        let edited = stored.find_attempt(&first.id).unwrap();
        assert_eq!(edited.notes, "one, revised");
        assert_eq!(edited.date, first.date);
        assert_eq!(edited.sequence_number, first.sequence_number);
        assert_eq!(stored.attempts[1].notes, "two");
    }

    #[test]
    fn edit_notes_of_missing_attempt() {
        let (mut fixture, id) = fixture();
        let missing = Uuid::new_v4();
        let err = edit_notes(&mut fixture.store, &ALEX.into(), &id, &missing, "x").unwrap_err();
        assert!(matches!(err, SendlogError::AttemptNotFound(found) if found == missing));
    }

    #[test]
    fn friend_cannot_log_attempts() {
        let (mut fixture, id) = fixture();
        let err = add(&mut fixture.store, &SAM.into(), &id, Utc::now(), "mine").unwrap_err();
        assert!(matches!(err, SendlogError::Unauthorized(_)));
        assert!(fixture.store.get_climb(&id).unwrap().attempts.is_empty());
    }
}
