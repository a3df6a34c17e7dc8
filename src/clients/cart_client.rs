use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::domain::{Cart, CartCreate, CartItem};

/// Client for interacting with the Cart actor. Carts open lazily on first use.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl_client_new!(CartClient, Cart);

impl CartClient {
    async fn open(&self, customer_id: &str) -> Result<(), CartError> {
        let payload = CartCreate { customer_id: customer_id.to_string() };
        match self.inner.create(payload).await {
            Ok(_) | Err(FrameworkError::AlreadyExists(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn apply(&self, customer_id: &str, action: CartAction) -> Result<CartActionResult, CartError> {
        self.open(customer_id).await?;
        Ok(self.inner.perform_action(customer_id.to_string(), action).await?)
    }

    /// Current cart contents; an unknown customer has an empty cart.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, customer_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        let cart = self.inner.get(customer_id.clone()).await?;
        Ok(cart.unwrap_or_else(|| Cart::new(customer_id)))
    }

    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    pub async fn add_to_cart(&self, customer_id: String, item: CartItem) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self.apply(&customer_id, CartAction::Add(item)).await? {
            CartActionResult::Updated(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, customer_id: String, item_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self.apply(&customer_id, CartAction::Remove(item_id)).await? {
            CartActionResult::Updated(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }

    /// Empties the cart in one step and returns the lines it held.
    #[instrument(skip(self))]
    pub async fn checkout(&self, customer_id: String) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        match self.apply(&customer_id, CartAction::Checkout).await? {
            CartActionResult::CheckedOut(items) => Ok(items),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::domain::MenuItem;

    fn spawn_client() -> CartClient {
        let (actor, inner) = ResourceActor::<Cart>::new(10, || "cart".to_string());
        tokio::spawn(actor.run());
        CartClient::new(inner)
    }

    fn burger() -> CartItem {
        CartItem::new(MenuItem::new("m1", "Burger", 10.0, "Mains"), "r1")
    }

    #[tokio::test]
    async fn carts_are_kept_per_customer() {
        let client = spawn_client();
        client.add_to_cart("alice".into(), burger()).await.unwrap();
        let cart = client.add_to_cart("alice".into(), burger()).await.unwrap();
        assert_eq!(cart.quantity_of("m1"), 2);
        assert_eq!(cart.total(), 20.0);

        assert!(client.get_cart("bob".into()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn checkout_drains_cart() {
        let client = spawn_client();
        client.add_to_cart("alice".into(), burger()).await.unwrap();

        let items = client.checkout("alice".into()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert!(client.get_cart("alice".into()).await.unwrap().is_empty());
        assert!(client.checkout("alice".into()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn removing_from_unknown_cart_is_a_no_op() {
        let client = spawn_client();
        let cart = client.remove_from_cart("carol".into(), "m1".into()).await.unwrap();
        assert!(cart.is_empty());
    }
}
