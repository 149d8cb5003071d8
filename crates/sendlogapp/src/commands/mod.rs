//! # Command Layer
//!
//! This module contains the **core business logic** of sendlog. Each command lives in
//! its own submodule and implements plain functions over a [`DataStore`] and the id of
//! the user performing the operation.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate input (climb fields, grades, links)
//! - Enforce ownership and the friend read-only policy ([`crate::sharing`])
//! - Drive the completion state machine ([`crate::completion`])
//! - Return a structured [`CmdResult`] with affected climbs and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, no colors, no prompts
//! - **Identity resolution**: the caller passes the acting user in
//! - **Argument parsing**: climb prefixes and flags are the API and CLI's job
//!
//! ## Testing Strategy
//!
//! Most of the tests live here. They run against `InMemoryStore` and the fixtures in
//! [`crate::store::memory::fixtures`], including simulated write failures.
//!
//! ## Command Modules
//!
//! - [`register`]: Create a user profile
//! - [`create`]: Add a climb to the caller's catalogue
//! - [`edit`]: Change a climb's descriptive fields
//! - [`attempts`]: Log attempts and edit their notes
//! - [`send`]: Mark climbs sent or unsent
//! - [`links`]: Attach beta links
//! - [`delete`]: Remove a climb
//! - [`list`]: Filtered, split view of a catalogue
//! - [`view`]: One climb with its attempts and links
//! - [`friends`]: Add, remove and list friends
//! - [`share`]: Browse a friend's catalogue and copy climbs from it
//! - [`helpers`]: Shared lookups (ownership checks, id prefixes)

use crate::filter::{ClimbFilter, CompletionSplit, LocationOption};
use crate::model::{Attempt, Climb, UserId, UserProfile};
use crate::sharing::{Access, Capabilities};
use serde::Serialize;

pub mod attempts;
pub mod create;
pub mod delete;
pub mod edit;
pub mod friends;
pub mod helpers;
pub mod links;
pub mod list;
pub mod register;
pub mod send;
pub mod share;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A catalogue as seen by one viewer: filtered, split by completion and tagged with
/// what the viewer may do with it.
#[derive(Debug, Clone)]
pub struct CatalogueView {
    pub owner: UserId,
    pub access: Access,
    pub filter: ClimbFilter,
    pub climbs: CompletionSplit,
    pub locations: Vec<LocationOption>,
    /// Size of the unfiltered catalogue.
    pub total: usize,
}

impl CatalogueView {
    pub fn capabilities(&self) -> Capabilities {
        self.access.capabilities()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_climbs: Vec<Climb>,
    pub attempts: Vec<Attempt>,
    pub catalogue: Option<CatalogueView>,
    pub users: Vec<UserProfile>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_climb(mut self, climb: Climb) -> Self {
        self.affected_climbs.push(climb);
        self
    }

    pub fn with_catalogue(mut self, catalogue: CatalogueView) -> Self {
        self.catalogue = Some(catalogue);
        self
    }

    pub fn with_users(mut self, users: Vec<UserProfile>) -> Self {
        self.users = users;
        self
    }
}
