use std::fmt;
use serde::{Deserialize, Serialize};
use super::CartItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Ongoing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether the vendor workflow allows moving from `self` to `next`.
    ///
    /// PENDING → ONGOING | CANCELLED, ONGOING → COMPLETED. COMPLETED and
    /// CANCELLED are terminal.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Ongoing)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Ongoing, OrderStatus::Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Ongoing => "ONGOING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// Represents a placed order. Items are frozen at placement; only `status` changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub status: OrderStatus,
    /// Unix milliseconds at placement.
    pub timestamp: i64,
    pub customer_id: String,
    pub restaurant_id: String,
}

/// Payload for creating a new order from a cart's contents.
#[derive(Debug)]
pub struct OrderCreate {
    pub customer_id: String,
    pub items: Vec<CartItem>,
}

impl Order {
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Ongoing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn only_workflow_edges_are_legal() {
        let legal: Vec<(OrderStatus, OrderStatus)> = ALL
            .iter()
            .flat_map(|from| ALL.iter().map(move |to| (*from, *to)))
            .filter(|(from, to)| from.can_transition_to(*to))
            .collect();

        assert_eq!(
            legal,
            vec![
                (OrderStatus::Pending, OrderStatus::Ongoing),
                (OrderStatus::Pending, OrderStatus::Cancelled),
                (OrderStatus::Ongoing, OrderStatus::Completed),
            ]
        );
    }

    #[test]
    fn status_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&OrderStatus::Ongoing).unwrap(), "\"ONGOING\"");
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
    }
}
