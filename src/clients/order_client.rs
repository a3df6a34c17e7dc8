use tracing::{debug, error, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::clients::CartClient;
use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for interacting with the Order actor.
///
/// Placing an order spans two actors: the cart is drained first, then the
/// order is created from what it held.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    cart_client: CartClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, cart_client: CartClient) -> Self {
        Self { inner, cart_client }
    }

    /// Turns the customer's cart into a PENDING order.
    ///
    /// Returns `Ok(None)` and changes nothing when the cart is empty.
    #[instrument(skip(self))]
    pub async fn place_order(&self, customer_id: String) -> Result<Option<Order>, OrderError> {
        info!("Processing place_order request");

        // Step 1: Drain the cart
        let items = self.cart_client.checkout(customer_id.clone()).await.map_err(|e| {
            error!(error = %e, "Cart checkout failed");
            OrderError::Cart(e.to_string())
        })?;

        if items.is_empty() {
            info!("Cart is empty, nothing to place");
            return Ok(None);
        }

        // Step 2: Freeze the lines into an order
        let line_count = items.len();
        let payload = OrderCreate { customer_id, items };
        let order_id = self.inner.create(payload).await.map_err(|e| {
            error!(error = %e, "Order creation failed after the cart was drained");
            OrderError::from(e)
        })?;

        let order = self
            .inner
            .get(order_id.clone())
            .await?
            .ok_or(OrderError::NotFound(order_id))?;

        info!(order_id = %order.id, total = order.total, line_count, "Order placed successfully");
        Ok(Some(order))
    }

    /// Overwrites the status with no legality check. Returns the previous status.
    #[instrument(skip(self))]
    pub async fn update_status(&self, order_id: String, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(order_id, OrderAction::SetStatus(status)).await? {
            OrderActionResult::StatusChanged { from, .. } => Ok(from),
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Moves the order along the vendor workflow. Returns the previous status.
    ///
    /// # Errors
    /// [`OrderError::IllegalTransition`] if the move is not part of the
    /// workflow; the order keeps its status.
    #[instrument(skip(self))]
    pub async fn transition(&self, order_id: String, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(order_id, OrderAction::Transition(status)).await? {
            OrderActionResult::StatusChanged { from, to } => {
                info!(%from, %to, "Order status changed");
                Ok(from)
            }
            OrderActionResult::Refused { current, requested } => {
                error!(%current, %requested, "Illegal status change refused");
                Err(OrderError::IllegalTransition { from: current, to: requested })
            }
        }
    }

    /// The whole ledger, most recent first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.inner.list().await?;
        orders.reverse();
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn orders_for_restaurant(&self, restaurant_id: String) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().filter(|order| order.restaurant_id == restaurant_id).collect())
    }

    /// Orders that are neither completed nor cancelled, most recent first.
    #[instrument(skip(self))]
    pub async fn active_orders_for_customer(&self, customer_id: String) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self.list_orders().await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.customer_id == customer_id && order.is_active())
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: String) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }
}
