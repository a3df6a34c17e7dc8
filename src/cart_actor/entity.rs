use crate::actor_framework::Entity;
use crate::domain::{Cart, CartCreate};
use super::actions::{CartAction, CartActionResult};

impl Entity for Cart {
    type Id = String;
    type CreatePayload = CartCreate;
    type Patch = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;

    fn id(&self) -> &String { &self.customer_id }

    /// Opens an empty cart. The generated id is ignored; carts are keyed by customer.
    fn from_create(_id: String, params: CartCreate) -> Result<Self, String> {
        Ok(Cart::new(params.customer_id))
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        match action {
            CartAction::Add(item) => {
                self.add(item);
                Ok(CartActionResult::Updated(self.clone()))
            }
            CartAction::Remove(item_id) => {
                self.remove(&item_id);
                Ok(CartActionResult::Updated(self.clone()))
            }
            CartAction::Checkout => Ok(CartActionResult::CheckedOut(self.take())),
        }
    }
}
