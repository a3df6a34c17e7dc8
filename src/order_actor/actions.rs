use crate::domain::OrderStatus;

/// Status changes that can be applied to a placed order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrites the status with no legality check.
    SetStatus(OrderStatus),
    /// Moves along the vendor workflow only; illegal moves leave the order untouched.
    Transition(OrderStatus),
}

/// Results from OrderActions
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    StatusChanged { from: OrderStatus, to: OrderStatus },
    /// The requested transition is not part of the workflow.
    Refused { current: OrderStatus, requested: OrderStatus },
}
