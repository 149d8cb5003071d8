use crate::grade::GradeError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SendlogError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid grade: {0}")]
    Grade(#[from] GradeError),

    #[error("Climb not found: {0}")]
    ClimbNotFound(Uuid),

    #[error("Attempt not found: {0}")]
    AttemptNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("You are not friends with this user")]
    FriendshipNotFound,

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("No user is signed in")]
    Unauthenticated,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("{0}")]
    SelfReference(String),

    #[error("You are already friends with this user")]
    AlreadyFriends,

    #[error("Climb is already sent")]
    AlreadySent,

    #[error("Climb has not been sent")]
    NotSent,

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SendlogError {
    /// Whether the failure came from the storage layer and the same call may
    /// succeed if issued again.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SendlogError::BackendUnavailable(_) | SendlogError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SendlogError>;
