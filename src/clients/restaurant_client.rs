use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{MenuItem, Restaurant, RestaurantCreate, RestaurantPatch};
use crate::restaurant_actor::{MenuCommand, MenuCommandResult, RestaurantError};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl_basic_client!(RestaurantClient, Restaurant, RestaurantError, restaurant);

impl RestaurantClient {
    #[instrument(skip(self))]
    pub async fn create_restaurant(&self, payload: RestaurantCreate) -> Result<String, RestaurantError> {
        debug!("Sending request");
        Ok(self.inner.create(payload).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(&self, id: String, patch: RestaurantPatch) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Applies one menu command through the restaurant's reducer.
    #[instrument(skip(self))]
    pub async fn apply_menu_command(
        &self,
        restaurant_id: String,
        command: MenuCommand,
    ) -> Result<MenuCommandResult, RestaurantError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(restaurant_id, command).await?)
    }

    /// Replaces the item with the same id, or appends it.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn upsert_item(&self, restaurant_id: String, item: MenuItem) -> Result<MenuItem, RestaurantError> {
        debug!("Sending request");
        match self.apply_menu_command(restaurant_id, MenuCommand::UpdateItem(item)).await? {
            MenuCommandResult::Saved(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn archive_item(&self, restaurant_id: String, item_id: String) -> Result<MenuItem, RestaurantError> {
        debug!("Sending request");
        match self.apply_menu_command(restaurant_id, MenuCommand::ArchiveItem(item_id.clone())).await? {
            MenuCommandResult::Archived(item) => item.ok_or(RestaurantError::ItemNotFound(item_id)),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn restore_item(&self, restaurant_id: String, item_id: String) -> Result<MenuItem, RestaurantError> {
        debug!("Sending request");
        match self.apply_menu_command(restaurant_id, MenuCommand::RestoreItem(item_id.clone())).await? {
            MenuCommandResult::Restored(item) => item.ok_or(RestaurantError::ItemNotFound(item_id)),
            other => Err(unexpected(other)),
        }
    }

    /// Removes the item unconditionally. Returns the removed item, if it existed.
    #[instrument(skip(self))]
    pub async fn permanently_delete(&self, restaurant_id: String, item_id: String) -> Result<Option<MenuItem>, RestaurantError> {
        debug!("Sending request");
        match self.apply_menu_command(restaurant_id, MenuCommand::DeleteItem(item_id)).await? {
            MenuCommandResult::Deleted(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    /// Restaurants as customers see them, with archived items removed,
    /// optionally narrowed to one location.
    #[instrument(skip(self))]
    pub async fn customer_catalog(&self, location: Option<String>) -> Result<Vec<Restaurant>, RestaurantError> {
        debug!("Sending request");
        let restaurants = self.list_restaurants().await?;
        Ok(restaurants
            .iter()
            .filter(|restaurant| location.as_ref().map_or(true, |wanted| &restaurant.location == wanted))
            .map(Restaurant::customer_projection)
            .collect())
    }
}

fn unexpected(result: MenuCommandResult) -> RestaurantError {
    RestaurantError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}
