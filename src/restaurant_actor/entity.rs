use crate::actor_framework::Entity;
use crate::domain::{Restaurant, RestaurantCreate, RestaurantPatch};
use super::actions::{MenuCommand, MenuCommandResult};

impl Entity for Restaurant {
    type Id = String;
    type CreatePayload = RestaurantCreate;
    type Patch = RestaurantPatch;
    type Action = MenuCommand;
    type ActionResult = MenuCommandResult;

    fn id(&self) -> &String { &self.id }

    fn from_create(id: String, params: RestaurantCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Restaurant name must not be empty".to_string());
        }
        Ok(Self {
            id,
            name: params.name,
            logo: params.logo,
            location: params.location,
            vendor_id: params.vendor_id,
            menu: Vec::new(),
        })
    }

    /// Updates the restaurant profile. The menu is left as is.
    fn on_update(&mut self, patch: RestaurantPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err("Restaurant name must not be empty".to_string());
            }
            self.name = name;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(vendor_id) = patch.vendor_id {
            self.vendor_id = vendor_id;
        }
        Ok(())
    }

    /// Applies one menu command.
    ///
    /// # Errors
    /// Saving an item with an empty id is rejected, since ids key the menu.
    fn handle_action(&mut self, command: MenuCommand) -> Result<MenuCommandResult, String> {
        match command {
            MenuCommand::AddItem(item) | MenuCommand::UpdateItem(item) => {
                if item.id.is_empty() {
                    return Err("Menu item id must not be empty".to_string());
                }
                self.upsert_item(item.clone());
                Ok(MenuCommandResult::Saved(item))
            }
            MenuCommand::ArchiveItem(item_id) => {
                Ok(MenuCommandResult::Archived(self.set_archived(&item_id, true)))
            }
            MenuCommand::RestoreItem(item_id) => {
                Ok(MenuCommandResult::Restored(self.set_archived(&item_id, false)))
            }
            MenuCommand::DeleteItem(item_id) => {
                Ok(MenuCommandResult::Deleted(self.remove_item(&item_id)))
            }
        }
    }
}
