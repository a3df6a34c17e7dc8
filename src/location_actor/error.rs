use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationError {
    #[error("Location validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for LocationError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Rejected(reason) => LocationError::ValidationError(reason),
            other => LocationError::ActorCommunicationError(other.to_string()),
        }
    }
}
