use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during user and vendor-directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User is not a vendor: {0}")]
    NotAVendor(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Restaurant error: {0}")]
    Restaurant(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Rejected(reason) => UserError::ValidationError(reason),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
