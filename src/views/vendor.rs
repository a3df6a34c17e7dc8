use tracing::{info, instrument, warn};
use uuid::Uuid;
use crate::clients::{OrderClient, RestaurantClient};
use crate::domain::{MenuItem, Order, OrderStatus, Restaurant};
use crate::restaurant_actor::RestaurantError;
use crate::session::{Session, SessionError};
use super::ViewError;

/// Tabs on the vendor order board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTab {
    /// New and in-progress orders.
    Pending,
    Completed,
    Cancelled,
}

impl OrderTab {
    pub fn includes(self, status: OrderStatus) -> bool {
        match self {
            OrderTab::Pending => matches!(status, OrderStatus::Pending | OrderStatus::Ongoing),
            OrderTab::Completed => status == OrderStatus::Completed,
            OrderTab::Cancelled => status == OrderStatus::Cancelled,
        }
    }
}

/// A vendor's order board and menu editor, scoped to the session's restaurant.
pub struct VendorView {
    session: Session,
    restaurant_id: String,
    restaurants: RestaurantClient,
    orders: OrderClient,
}

impl VendorView {
    pub fn new(session: Session, restaurants: RestaurantClient, orders: OrderClient) -> Result<Self, ViewError> {
        let restaurant_id = session.restaurant_id()?.to_string();
        Ok(Self { session, restaurant_id, restaurants, orders })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub async fn restaurant(&self) -> Result<Restaurant, ViewError> {
        let restaurant = self.restaurants.get_restaurant(self.restaurant_id.clone()).await?;
        Ok(restaurant.ok_or_else(|| RestaurantError::NotFound(self.restaurant_id.clone()))?)
    }

    // --- Orders ---

    /// All of this restaurant's orders, most recent first.
    pub async fn orders(&self) -> Result<Vec<Order>, ViewError> {
        Ok(self.orders.orders_for_restaurant(self.restaurant_id.clone()).await?)
    }

    pub async fn orders_in_tab(&self, tab: OrderTab) -> Result<Vec<Order>, ViewError> {
        let orders = self.orders().await?;
        Ok(orders.into_iter().filter(|order| tab.includes(order.status)).collect())
    }

    async fn owned_order(&self, order_id: &str) -> Result<Order, ViewError> {
        let order = self
            .orders
            .get_order(order_id.to_string())
            .await?
            .ok_or_else(|| crate::order_actor::OrderError::NotFound(order_id.to_string()))?;
        if order.restaurant_id != self.restaurant_id {
            return Err(SessionError::NotOwner(order_id.to_string()).into());
        }
        Ok(order)
    }

    /// Overwrites an order's status with no workflow check.
    #[instrument(skip(self))]
    pub async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> Result<OrderStatus, ViewError> {
        self.owned_order(order_id).await?;
        Ok(self.orders.update_status(order_id.to_string(), status).await?)
    }

    async fn transition(&self, order_id: &str, status: OrderStatus) -> Result<OrderStatus, ViewError> {
        self.owned_order(order_id).await?;
        Ok(self.orders.transition(order_id.to_string(), status).await?)
    }

    /// PENDING → ONGOING.
    pub async fn accept_order(&self, order_id: &str) -> Result<OrderStatus, ViewError> {
        self.transition(order_id, OrderStatus::Ongoing).await
    }

    /// PENDING → CANCELLED.
    pub async fn reject_order(&self, order_id: &str) -> Result<OrderStatus, ViewError> {
        self.transition(order_id, OrderStatus::Cancelled).await
    }

    /// ONGOING → COMPLETED.
    pub async fn complete_order(&self, order_id: &str) -> Result<OrderStatus, ViewError> {
        self.transition(order_id, OrderStatus::Completed).await
    }

    // --- Menu ---

    pub async fn active_menu(&self) -> Result<Vec<MenuItem>, ViewError> {
        Ok(self.restaurant().await?.active_items().cloned().collect())
    }

    pub async fn archived_menu(&self) -> Result<Vec<MenuItem>, ViewError> {
        Ok(self.restaurant().await?.archived_items().cloned().collect())
    }

    /// Adds a new item. A blank id is replaced with a generated one.
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn add_item(&self, mut item: MenuItem) -> Result<MenuItem, ViewError> {
        if item.id.trim().is_empty() {
            item.id = format!("m_{}", Uuid::new_v4().simple());
        }
        let saved = self.restaurants.upsert_item(self.restaurant_id.clone(), item).await?;
        info!(item_id = %saved.id, "Menu item added");
        Ok(saved)
    }

    /// Saves an edited item over the one with the same id.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn save_item(&self, item: MenuItem) -> Result<MenuItem, ViewError> {
        Ok(self.restaurants.upsert_item(self.restaurant_id.clone(), item).await?)
    }

    pub async fn archive_item(&self, item_id: &str) -> Result<MenuItem, ViewError> {
        Ok(self.restaurants.archive_item(self.restaurant_id.clone(), item_id.to_string()).await?)
    }

    pub async fn restore_item(&self, item_id: &str) -> Result<MenuItem, ViewError> {
        Ok(self.restaurants.restore_item(self.restaurant_id.clone(), item_id.to_string()).await?)
    }

    /// Permanently deletes an archived item once `confirm` agrees.
    ///
    /// Returns `false` when the item is unknown, still active, or `confirm`
    /// declines; nothing changes in any of these cases. Active items must be
    /// archived first and `confirm` is not consulted for them.
    #[instrument(skip(self, confirm))]
    pub async fn delete_item(&self, item_id: &str, confirm: impl FnOnce(&MenuItem) -> bool) -> Result<bool, ViewError> {
        let restaurant = self.restaurant().await?;
        let Some(item) = restaurant.item(item_id) else {
            return Ok(false);
        };
        if !item.archived {
            warn!("Refusing to delete an active item");
            return Ok(false);
        }
        if !confirm(item) {
            info!("Delete declined");
            return Ok(false);
        }
        let removed = self.restaurants.permanently_delete(self.restaurant_id.clone(), item_id.to_string()).await?;
        Ok(removed.is_some())
    }
}
