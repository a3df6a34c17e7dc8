use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Menu item not available: {0}")]
    ItemUnavailable(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(error: FrameworkError) -> Self {
        CartError::ActorCommunicationError(error.to_string())
    }
}
