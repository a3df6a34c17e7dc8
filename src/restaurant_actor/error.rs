use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    #[error("Restaurant not found: {0}")]
    NotFound(String),
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),
    #[error("Restaurant validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RestaurantError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => RestaurantError::NotFound(id),
            FrameworkError::Rejected(reason) => RestaurantError::ValidationError(reason),
            other => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
