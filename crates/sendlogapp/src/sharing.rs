//! Sharing and copy policy.
//!
//! A viewer may read another user's catalogue only while the two are friends. What
//! the viewer gets is a read-only projection: every mutating operation is refused,
//! and the single thing they can do with a friend's climb is copy it into their own
//! catalogue.
//!
//! | Viewer          | Read | Mutate | Copy |
//! |-----------------|------|--------|------|
//! | owner           | yes  | yes    | no   |
//! | friend of owner | yes  | no     | yes  |
//! | anyone else     | no   | no     | no   |
//!
//! A copy duplicates the descriptive fields only. Attempts, links and completion
//! stay with the original, which is not modified.

use crate::error::{Result, SendlogError};
use crate::model::{Climb, ClimbFields, UserId};
use crate::store::DataStore;

/// How a viewer relates to the catalogue being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Owner,
    ReadOnly,
}

/// What a viewer may do with the climbs they can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_mutate: bool,
    pub can_copy: bool,
}

impl Access {
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Access::Owner => Capabilities {
                can_mutate: true,
                can_copy: false,
            },
            Access::ReadOnly => Capabilities {
                can_mutate: false,
                can_copy: true,
            },
        }
    }
}

/// Decides whether `viewer` may read `owner`'s catalogue.
pub fn authorize_read<S: DataStore>(store: &S, viewer: &UserId, owner: &UserId) -> Result<Access> {
    if viewer == owner {
        return Ok(Access::Owner);
    }
    if store.get_friend_relationship(viewer, owner)? {
        return Ok(Access::ReadOnly);
    }
    tracing::warn!(viewer = %viewer, owner = %owner, "catalogue read refused");
    Err(SendlogError::Unauthorized(
        "you are not authorized to view these climbs".to_string(),
    ))
}

/// Refuses any mutation of a climb the viewer does not own.
pub fn ensure_can_mutate(viewer: &UserId, climb: &Climb) -> Result<()> {
    if &climb.owner_id == viewer {
        return Ok(());
    }
    tracing::warn!(viewer = %viewer, climb = %climb.id, "mutation of read-only climb refused");
    Err(SendlogError::Unauthorized(format!(
        "'{}' belongs to another climber and is read-only",
        climb.name
    )))
}

/// The fields a copy carries over from its source.
pub fn copy_fields(source: &Climb) -> ClimbFields {
    source.fields()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Discipline, UserId};
    use crate::store::memory::fixtures::{StoreFixture, ALEX, JO, SAM};

    #[test]
    fn owner_reads_own_catalogue() {
        let fixture = StoreFixture::new();
        let access = authorize_read(&fixture.store, &ALEX.into(), &ALEX.into()).unwrap();
        assert_eq!(access, Access::Owner);
        assert!(access.capabilities().can_mutate);
    }

    #[test]
    fn friend_gets_read_only_copy_capability() {
        let fixture = StoreFixture::new().with_users().with_friends(ALEX, SAM);
        let access = authorize_read(&fixture.store, &SAM.into(), &ALEX.into()).unwrap();
        assert_eq!(access, Access::ReadOnly);
        assert_eq!(
            access.capabilities(),
            Capabilities {
                can_mutate: false,
                can_copy: true
            }
        );
    }

    #[test]
    fn stranger_is_unauthorized() {
        let fixture = StoreFixture::new().with_users().with_friends(ALEX, SAM);
        let result = authorize_read(&fixture.store, &JO.into(), &ALEX.into());
        assert!(matches!(result, Err(SendlogError::Unauthorized(_))));
    }

    #[test]
    fn mutation_requires_ownership() {
        let fixture = StoreFixture::new().with_climb(ALEX, "Roof", Discipline::Boulder, "V5");
        let climb = fixture.climb_named(ALEX, "Roof");
        assert!(ensure_can_mutate(&UserId::from(ALEX), &climb).is_ok());
        assert!(matches!(
            ensure_can_mutate(&UserId::from(SAM), &climb),
            Err(SendlogError::Unauthorized(_))
        ));
    }
}
