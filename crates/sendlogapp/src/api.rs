//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every sendlog operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Resolves identity**: every call asks the [`IdentityProvider`] for the acting
//!   user first; a signed-out provider fails the call with `Unauthenticated`
//! - **Normalizes inputs**: climb references (full UUID or unique prefix) and
//!   attempt references (sequence number, UUID or prefix) become ids
//! - **Dispatches** to the matching function in [`crate::commands`]
//!
//! Business rules live in the commands, never here.
//!
//! ## Climb References
//!
//! A climb reference is resolved against the catalogue it is expected to be in:
//! the caller's own, or a friend's when the call names one by email. Friend
//! catalogues are authorized before any of their ids are searched.
//!
//! ## Generic Over DataStore and IdentityProvider
//!
//! - Production: `SendlogApi<FileStore, FixedIdentity>`
//! - Testing: `SendlogApi<InMemoryStore, FixedIdentity>`

use crate::commands::{self, helpers, CmdResult};
use crate::error::Result;
use crate::filter::ClimbFilter;
use crate::identity::IdentityProvider;
use crate::model::{ClimbFields, UserId};
use crate::sharing::authorize_read;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct SendlogApi<S: DataStore, I: IdentityProvider> {
    store: S,
    identity: I,
}

impl<S: DataStore, I: IdentityProvider> SendlogApi<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        Self { store, identity }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn viewer(&self) -> Result<UserId> {
        self.identity.current_identity()
    }

    fn own_climb_id(&self, viewer: &UserId, reference: &str) -> Result<Uuid> {
        helpers::resolve_climb_ref(&self.store, viewer, reference)
    }

    /// Resolves a reference in a friend's catalogue after checking the friendship.
    fn friend_climb_id(&self, viewer: &UserId, friend_email: &str, reference: &str) -> Result<Uuid> {
        let owner = self.store.lookup_user_by_email(friend_email)?;
        authorize_read(&self.store, viewer, &owner.id)?;
        helpers::resolve_climb_ref(&self.store, &owner.id, reference)
    }

    /// Creates a profile under a fresh user id. Does not need a signed-in user.
    pub fn register(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let id = UserId::new(Uuid::new_v4().to_string());
        commands::register::run(&mut self.store, &id, name, email)
    }

    pub fn whoami(&self) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        commands::register::whoami(&self.store, &viewer)
    }

    pub fn add_climb(&mut self, fields: ClimbFields) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        commands::create::run(&mut self.store, &viewer, fields)
    }

    pub fn edit_climb(&mut self, reference: &str, fields: ClimbFields) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        commands::edit::run(&mut self.store, &viewer, &id, fields)
    }

    /// Current field values of one of the caller's climbs, as a base for edits.
    pub fn climb_fields(&self, reference: &str) -> Result<ClimbFields> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        Ok(helpers::owned_climb(&self.store, &viewer, &id)?.fields())
    }

    pub fn list_climbs(&self, filter: ClimbFilter) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        commands::list::run(&self.store, &viewer, filter)
    }

    /// Shows a climb from the caller's catalogue, or from `friend_email`'s.
    pub fn show_climb(&self, reference: &str, friend_email: Option<&str>) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = match friend_email {
            Some(email) => self.friend_climb_id(&viewer, email, reference)?,
            None => self.own_climb_id(&viewer, reference)?,
        };
        commands::view::run(&self.store, &viewer, &id)
    }

    pub fn log_attempt(
        &mut self,
        reference: &str,
        date: DateTime<Utc>,
        notes: &str,
    ) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        commands::attempts::add(&mut self.store, &viewer, &id, date, notes)
    }

    pub fn edit_attempt_notes(
        &mut self,
        reference: &str,
        attempt: &str,
        notes: &str,
    ) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        let climb = helpers::owned_climb(&self.store, &viewer, &id)?;
        let attempt_id = helpers::resolve_attempt_ref(&climb, attempt)?;
        commands::attempts::edit_notes(&mut self.store, &viewer, &id, &attempt_id, notes)
    }

    pub fn send_climb(
        &mut self,
        reference: &str,
        date: DateTime<Utc>,
        notes: &str,
    ) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        commands::send::send(&mut self.store, &viewer, &id, date, notes)
    }

    pub fn unsend_climb(&mut self, reference: &str) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        commands::send::unsend(&mut self.store, &viewer, &id)
    }

    pub fn add_link(&mut self, reference: &str, name: &str, url: &str) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        commands::links::add(&mut self.store, &viewer, &id, name, url)
    }

    pub fn delete_climb(&mut self, reference: &str) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.own_climb_id(&viewer, reference)?;
        commands::delete::run(&mut self.store, &viewer, &id)
    }

    pub fn add_friend(&mut self, email: &str) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        commands::friends::add(&mut self.store, &viewer, email)
    }

    pub fn remove_friend(&mut self, email: &str) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        commands::friends::remove(&mut self.store, &viewer, email)
    }

    pub fn list_friends(&self) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        commands::friends::list(&self.store, &viewer)
    }

    pub fn browse_friend(&self, friend_email: &str, filter: ClimbFilter) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        commands::share::browse(&self.store, &viewer, friend_email, filter)
    }

    pub fn copy_climb(&mut self, friend_email: &str, reference: &str) -> Result<CmdResult> {
        let viewer = self.viewer()?;
        let id = self.friend_climb_id(&viewer, friend_email, reference)?;
        commands::share::copy(&mut self.store, &viewer, &id)
    }
}
