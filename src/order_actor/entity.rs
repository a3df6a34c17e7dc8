use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{items_total, Order, OrderCreate, OrderStatus};
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Patch = (); // Items are frozen at placement
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String { &self.id }

    /// Freezes a cart's contents into a new order.
    ///
    /// # Notes
    /// The order starts PENDING. Its total excludes the service fee and its
    /// restaurant is taken from the first line.
    fn from_create(id: String, params: OrderCreate) -> Result<Self, String> {
        let restaurant_id = params
            .items
            .first()
            .map(|item| item.restaurant_id.clone())
            .ok_or_else(|| "Cannot place an order without items".to_string())?;

        Ok(Self {
            id,
            total: items_total(&params.items),
            items: params.items,
            status: OrderStatus::Pending,
            timestamp: Utc::now().timestamp_millis(),
            customer_id: params.customer_id,
            restaurant_id,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn on_delete(&self) -> Result<(), String> {
        Err(format!("Order {} is part of the ledger and cannot be deleted", self.id))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        let from = self.status;
        match action {
            OrderAction::SetStatus(to) => {
                self.status = to;
                Ok(OrderActionResult::StatusChanged { from, to })
            }
            OrderAction::Transition(to) if from.can_transition_to(to) => {
                self.status = to;
                Ok(OrderActionResult::StatusChanged { from, to })
            }
            OrderAction::Transition(requested) => {
                Ok(OrderActionResult::Refused { current: from, requested })
            }
        }
    }
}
