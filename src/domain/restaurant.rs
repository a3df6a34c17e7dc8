use serde::{Deserialize, Serialize};
use super::MenuItem;

/// A vendor's storefront and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub location: String,
    pub vendor_id: String,
    pub menu: Vec<MenuItem>,
}

/// Payload for creating a new restaurant. Restaurants always start with an empty menu.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub logo: String,
    pub location: String,
    pub vendor_id: String,
}

/// Payload for updating a restaurant's profile. The menu is vendor-managed
/// through [`MenuCommand`](crate::restaurant_actor::MenuCommand) instead.
#[derive(Debug, Clone, Default)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub location: Option<String>,
    pub vendor_id: Option<String>,
}

impl Restaurant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        vendor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: String::new(),
            location: location.into(),
            vendor_id: vendor_id.into(),
            menu: Vec::new(),
        }
    }

    pub fn with_menu(mut self, menu: Vec<MenuItem>) -> Self {
        self.menu = menu;
        self
    }

    pub fn item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }

    /// Menu items that are not archived, in menu order.
    pub fn active_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu.iter().filter(|item| !item.archived)
    }

    /// Menu items that are archived, in menu order.
    pub fn archived_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu.iter().filter(|item| item.archived)
    }

    /// The restaurant as a customer sees it: archived items removed.
    pub fn customer_projection(&self) -> Restaurant {
        Restaurant {
            menu: self.active_items().cloned().collect(),
            ..self.clone()
        }
    }

    /// Replaces the item with the same id, or appends it.
    pub fn upsert_item(&mut self, item: MenuItem) {
        match self.menu.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.menu.push(item),
        }
    }

    /// Sets the archived flag. Returns the updated item, or `None` if the id is unknown.
    pub fn set_archived(&mut self, item_id: &str, archived: bool) -> Option<MenuItem> {
        let item = self.menu.iter_mut().find(|item| item.id == item_id)?;
        item.archived = archived;
        Some(item.clone())
    }

    /// Removes an item regardless of its archived flag.
    pub fn remove_item(&mut self, item_id: &str) -> Option<MenuItem> {
        let index = self.menu.iter().position(|item| item.id == item_id)?;
        Some(self.menu.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diner() -> Restaurant {
        Restaurant::new("r1", "Diner", "Downtown", "u2").with_menu(vec![
            MenuItem::new("m1", "Burger", 10.0, "Mains"),
            MenuItem::new("m2", "Fries", 3.0, "Sides"),
        ])
    }

    #[test]
    fn upsert_replaces_matching_item_in_place() {
        let mut restaurant = diner();
        restaurant.upsert_item(MenuItem::new("m1", "Cheeseburger", 11.0, "Mains"));
        assert_eq!(restaurant.menu.len(), 2);
        assert_eq!(restaurant.menu[0].name, "Cheeseburger");
    }

    #[test]
    fn upsert_appends_new_item() {
        let mut restaurant = diner();
        restaurant.upsert_item(MenuItem::new("m3", "Shake", 5.0, "Drinks"));
        let ids: Vec<&str> = restaurant.menu.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn archive_restore_round_trip() {
        let mut restaurant = diner();
        let before = restaurant.customer_projection();

        restaurant.set_archived("m2", true);
        assert_eq!(restaurant.customer_projection().menu.len(), 1);
        assert_eq!(restaurant.archived_items().count(), 1);

        restaurant.set_archived("m2", false);
        assert_eq!(restaurant.customer_projection(), before);
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let mut restaurant = diner();
        assert!(restaurant.set_archived("missing", true).is_none());
        assert!(restaurant.remove_item("missing").is_none());
        assert_eq!(restaurant, diner());
    }
}
