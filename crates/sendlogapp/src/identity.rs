//! Who is acting.
//!
//! Every operation on the [`crate::api::SendlogApi`] asks its [`IdentityProvider`] for
//! the current user before doing anything else. Nothing in the library caches an
//! identity between calls.

use crate::error::{Result, SendlogError};
use crate::model::UserId;

pub trait IdentityProvider {
    /// The signed-in user, or [`SendlogError::Unauthenticated`].
    fn current_identity(&self) -> Result<UserId>;
}

/// An identity fixed at construction, either signed in or signed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedIdentity {
    user: Option<UserId>,
}

impl FixedIdentity {
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_identity(&self) -> Result<UserId> {
        self.user.clone().ok_or(SendlogError::Unauthenticated)
    }
}
