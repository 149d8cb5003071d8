//! Completion state machine.
//!
//! A climb is either `Active` (not completed) or `Sent`:
//!
//! ```text
//!            send(date, notes)
//!   Active ─────────────────────▶ Sent
//!          ◀─────────────────────
//!                 unsend()
//! ```
//!
//! - `send` appends a completion attempt and stamps `completed_at`.
//! - `unsend` clears the stamp and strips every completion attempt, not only the
//!   latest one, so duplicates left behind by older data are cleaned up too.
//! - `add_attempt` and `edit_attempt_notes` are valid in both states and never
//!   change completion.
//!
//! The transitions here only mutate an in-memory [`Climb`]. Commands load the
//! climb, run a transition, and write the changed fields back as one patch.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, SendlogError};
use crate::model::{Attempt, AttemptKind, Climb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    Active,
    Sent { at: DateTime<Utc> },
}

pub fn state(climb: &Climb) -> CompletionState {
    match (climb.completed, climb.completed_at) {
        (true, Some(at)) => CompletionState::Sent { at },
        // Only reachable for climbs built in memory; loaded climbs are repaired.
        (true, None) => CompletionState::Sent {
            at: climb.created_at,
        },
        (false, _) => CompletionState::Active,
    }
}

fn push_attempt(climb: &mut Climb, date: DateTime<Utc>, notes: &str, kind: AttemptKind) -> Attempt {
    climb.attempt_counter += 1;
    let attempt = Attempt::new(climb.attempt_counter, date, notes, kind);
    climb.attempts.push(attempt.clone());
    attempt
}

/// Logs a regular attempt.
pub fn add_attempt(climb: &mut Climb, date: DateTime<Utc>, notes: &str) -> Attempt {
    push_attempt(climb, date, notes, AttemptKind::Regular)
}

/// Marks the climb sent on `date`, recording the send as a completion attempt.
pub fn send(climb: &mut Climb, date: DateTime<Utc>, notes: &str) -> Result<Attempt> {
    if let CompletionState::Sent { .. } = state(climb) {
        return Err(SendlogError::AlreadySent);
    }
    let attempt = push_attempt(climb, date, notes, AttemptKind::Completion);
    climb.completed = true;
    climb.completed_at = Some(date);
    Ok(attempt)
}

/// Reverts a send. Returns the completion attempts that were removed.
pub fn unsend(climb: &mut Climb) -> Result<Vec<Attempt>> {
    if state(climb) == CompletionState::Active {
        return Err(SendlogError::NotSent);
    }
    let (removed, kept): (Vec<Attempt>, Vec<Attempt>) = climb
        .attempts
        .drain(..)
        .partition(|a| a.is_completion());
    climb.attempts = kept;
    climb.completed = false;
    climb.completed_at = None;
    Ok(removed)
}

/// Replaces the notes of one attempt, leaving every other field untouched.
pub fn edit_attempt_notes(climb: &mut Climb, attempt_id: &Uuid, notes: &str) -> Result<Attempt> {
    let attempt = climb
        .attempts
        .iter_mut()
        .find(|a| &a.id == attempt_id)
        .ok_or(SendlogError::AttemptNotFound(*attempt_id))?;
    attempt.notes = notes.trim().to_string();
    Ok(attempt.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClimbFields, Discipline, UserId};
    use chrono::TimeZone;

    fn climb() -> Climb {
        Climb::new(
            UserId::from("u1"),
            ClimbFields::new("The Mandala", Discipline::Boulder, "V12", "Buttermilks"),
        )
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn send_appends_completion_attempt_with_next_sequence() {
        let mut c = climb();
        add_attempt(&mut c, day(1), "fell at the lip");
        add_attempt(&mut c, day(2), "closer");

        let sent = send(&mut c, day(3), "finally").unwrap();
        assert_eq!(sent.sequence_number, 3);
        assert_eq!(sent.kind, AttemptKind::Completion);
        assert!(c.completed);
        assert_eq!(c.completed_at, Some(day(3)));
        assert_eq!(state(&c), CompletionState::Sent { at: day(3) });
    }

    #[test]
    fn send_then_unsend_restores_attempts() {
        let mut c = climb();
        add_attempt(&mut c, day(1), "one");
        add_attempt(&mut c, day(2), "two");
        let before = c.attempts.clone();

        send(&mut c, day(3), "").unwrap();
        let removed = unsend(&mut c).unwrap();

        assert_eq!(removed.len(), 1);
        assert!(!c.completed);
        assert_eq!(c.completed_at, None);
        assert_eq!(c.attempts, before);
    }

    #[test]
    fn unsend_strips_every_completion_attempt() {
        let mut c = climb();
        add_attempt(&mut c, day(1), "one");
        send(&mut c, day(2), "").unwrap();
        // Duplicate marker, as older data can carry.
        let dup = Attempt::new(9, day(4), "again", AttemptKind::Completion);
        c.attempts.push(dup);

        unsend(&mut c).unwrap();
        assert_eq!(c.attempts.len(), 1);
        assert!(c.attempts.iter().all(|a| !a.is_completion()));
    }

    #[test]
    fn regular_note_that_looks_like_a_send_is_kept() {
        let mut c = climb();
        add_attempt(&mut c, day(1), "Sent it! 🎉 (not really)");
        send(&mut c, day(2), "for real").unwrap();
        unsend(&mut c).unwrap();
        assert_eq!(c.attempts.len(), 1);
        assert_eq!(c.attempts[0].notes, "Sent it! 🎉 (not really)");
    }

    #[test]
    fn sequence_numbers_are_not_reused_after_unsend() {
        let mut c = climb();
        add_attempt(&mut c, day(1), "one");
        send(&mut c, day(2), "").unwrap();
        unsend(&mut c).unwrap();
        let next = add_attempt(&mut c, day(3), "three");
        assert_eq!(next.sequence_number, 3);
    }

    #[test]
    fn double_send_and_unsend_of_active_are_rejected() {
        let mut c = climb();
        assert!(matches!(unsend(&mut c), Err(SendlogError::NotSent)));
        send(&mut c, day(1), "").unwrap();
        assert!(matches!(
            send(&mut c, day(2), ""),
            Err(SendlogError::AlreadySent)
        ));
        assert_eq!(c.attempts.len(), 1);
    }

    #[test]
    fn add_attempt_never_changes_completion() {
        let mut c = climb();
        send(&mut c, day(1), "").unwrap();
        add_attempt(&mut c, day(2), "repeat");
        assert!(c.completed);
        assert_eq!(c.completed_at, Some(day(1)));
    }

    #[test]
    fn edit_notes_touches_only_that_attempt() {
        let mut c = climb();
        let first = add_attempt(&mut c, day(1), "one");
        let second = add_attempt(&mut c, day(2), "two");

        let edited = edit_attempt_notes(&mut c, &first.id, "  one, revised ").unwrap();
        assert_eq!(edited.notes, "one, revised");
        assert_eq!(edited.id, first.id);
        assert_eq!(edited.date, first.date);
        assert_eq!(edited.sequence_number, first.sequence_number);
        assert_eq!(c.attempts[1], second);
    }

    #[test]
    fn edit_notes_of_unknown_attempt_is_not_found() {
        let mut c = climb();
        add_attempt(&mut c, day(1), "one");
        let missing = Uuid::new_v4();
        assert!(matches!(
            edit_attempt_notes(&mut c, &missing, "x"),
            Err(SendlogError::AttemptNotFound(id)) if id == missing
        ));
    }
}
