use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Role, User, UserCreate, UserPatch};
use crate::user_actor::{UserAction, UserActionResult, UserError};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, payload: UserCreate) -> Result<String, UserError> {
        debug!("Sending request");
        Ok(self.inner.create(payload).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: String) -> Result<(), UserError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    /// Flips the active flag and returns its new value.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: String) -> Result<bool, UserError> {
        debug!("Sending request");
        match self.inner.perform_action(id, UserAction::ToggleActive).await? {
            UserActionResult::ToggleActive(active) => Ok(active),
            other => Err(unexpected(other)),
        }
    }

    /// Overwrites the stored record with `user`, keeping only the id.
    #[instrument(skip(self, user))]
    pub async fn replace_user(&self, id: String, user: User) -> Result<User, UserError> {
        debug!("Sending request");
        match self.inner.perform_action(id, UserAction::Replace(user)).await? {
            UserActionResult::Replaced(user) => Ok(user),
            other => Err(unexpected(other)),
        }
    }

    /// Exact username/password lookup against the user table.
    #[instrument(skip(self, password))]
    pub async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await?;
        Ok(users.into_iter().find(|user| user.matches_credentials(username, password)))
    }

    #[instrument(skip(self))]
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        let users = self.list_users().await?;
        Ok(users.into_iter().filter(|user| user.role == role).collect())
    }
}

fn unexpected(result: UserActionResult) -> UserError {
    UserError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}
