use tracing::{info, instrument};
use crate::cart_actor::CartError;
use crate::clients::{CartClient, OrderClient, RestaurantClient};
use crate::domain::{Cart, CartItem, CheckoutSummary, Order, Restaurant, Role, Temperature};
use crate::session::Session;
use super::ViewError;

/// What a customer can browse and do: catalog, cart, checkout, order tracking.
pub struct CustomerView {
    session: Session,
    restaurants: RestaurantClient,
    carts: CartClient,
    orders: OrderClient,
    service_fee: f64,
}

impl CustomerView {
    pub fn new(
        session: Session,
        restaurants: RestaurantClient,
        carts: CartClient,
        orders: OrderClient,
        service_fee: f64,
    ) -> Result<Self, ViewError> {
        session.require(Role::Customer)?;
        Ok(Self { session, restaurants, carts, orders, service_fee })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn customer_id(&self) -> String {
        self.session.customer_id().to_string()
    }

    /// Restaurants with their orderable items. Archived items never appear.
    pub async fn catalog(&self, location: Option<String>) -> Result<Vec<Restaurant>, ViewError> {
        Ok(self.restaurants.customer_catalog(location).await?)
    }

    /// Adds one unit of a catalog item, recording the chosen variants on the line.
    ///
    /// # Errors
    /// [`CartError::ItemUnavailable`] if the item is unknown or archived, and
    /// [`CartError::InvalidSelection`] if the size or temperature is not offered.
    #[instrument(skip(self), fields(customer_id = %self.session.customer_id()))]
    pub async fn add_to_cart(
        &self,
        restaurant_id: &str,
        item_id: &str,
        size: Option<String>,
        temperature: Option<Temperature>,
    ) -> Result<Cart, ViewError> {
        let restaurant = self
            .restaurants
            .get_restaurant(restaurant_id.to_string())
            .await?
            .map(|restaurant| restaurant.customer_projection());

        let item = restaurant
            .as_ref()
            .and_then(|restaurant| restaurant.item(item_id))
            .cloned()
            .ok_or_else(|| CartError::ItemUnavailable(item_id.to_string()))?;

        item.check_selection(size.as_deref(), temperature)
            .map_err(CartError::InvalidSelection)?;

        let line = CartItem::new(item, restaurant_id).with_selection(size, temperature);
        Ok(self.carts.add_to_cart(self.customer_id(), line).await?)
    }

    pub async fn remove_from_cart(&self, item_id: &str) -> Result<Cart, ViewError> {
        Ok(self.carts.remove_from_cart(self.customer_id(), item_id.to_string()).await?)
    }

    pub async fn cart(&self) -> Result<Cart, ViewError> {
        Ok(self.carts.get_cart(self.customer_id()).await?)
    }

    /// Subtotal plus the service fee, as shown in the cart panel.
    pub async fn checkout_summary(&self) -> Result<CheckoutSummary, ViewError> {
        let cart = self.cart().await?;
        Ok(cart.checkout_summary(self.service_fee))
    }

    /// Places the cart as an order. An empty cart is silently ignored.
    #[instrument(skip(self), fields(customer_id = %self.session.customer_id()))]
    pub async fn place_order(&self) -> Result<Option<Order>, ViewError> {
        let order = self.orders.place_order(self.customer_id()).await?;
        if let Some(order) = &order {
            info!(order_id = %order.id, "Order placed successfully!");
        }
        Ok(order)
    }

    /// This customer's orders still in progress, most recent first.
    pub async fn active_orders(&self) -> Result<Vec<Order>, ViewError> {
        Ok(self.orders.active_orders_for_customer(self.customer_id()).await?)
    }
}
