use crate::domain::{Cart, CartItem};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of the item, opening a line if needed.
    Add(CartItem),
    /// Removes one unit of the item id; absent ids are ignored.
    Remove(String),
    /// Empties the cart and hands back its lines in one step.
    Checkout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// Snapshot of the cart after the change.
    Updated(Cart),
    /// The lines the cart held before it was emptied.
    CheckedOut(Vec<CartItem>),
}
