use serde::{Deserialize, Serialize};
use super::{MenuItem, Temperature};

/// A menu item snapshot in a cart, with quantity and variant selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
    pub restaurant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_temp: Option<Temperature>,
}

impl CartItem {
    pub fn new(item: MenuItem, restaurant_id: impl Into<String>) -> Self {
        Self {
            item,
            quantity: 1,
            restaurant_id: restaurant_id.into(),
            selected_size: None,
            selected_temp: None,
        }
    }

    pub fn with_selection(mut self, size: Option<String>, temperature: Option<Temperature>) -> Self {
        self.selected_size = size;
        self.selected_temp = temperature;
        self
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Effective unit price. Variant selection does not change it.
    pub fn unit_price(&self) -> f64 {
        self.item.price
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    /// What the selected variants would cost, for display next to the line.
    pub fn variant_price(&self) -> f64 {
        self.item.compose_price(self.selected_size.as_deref(), self.selected_temp)
    }
}

/// Subtotal, fee and grand total shown at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub service_fee: f64,
    pub total: f64,
}

/// Sum of price × quantity over a set of cart lines.
pub fn items_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Payload for opening a cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub customer_id: String,
}

/// A customer's in-progress selection, keyed by customer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub customer_id: String,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.items
            .iter()
            .find(|entry| entry.id() == item_id)
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    /// Adds one unit. Lines are keyed by item id only, so a repeated add bumps
    /// the existing line and keeps its original variant selection.
    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|entry| entry.id() == item.id()) {
            Some(existing) => existing.quantity += 1,
            None => self.items.push(CartItem { quantity: 1, ..item }),
        }
    }

    /// Removes one unit; the line disappears when its quantity would reach zero.
    pub fn remove(&mut self, item_id: &str) {
        let Some(index) = self.items.iter().position(|entry| entry.id() == item_id) else {
            return;
        };
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
    }

    /// Empties the cart, returning what it held.
    pub fn take(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    pub fn total(&self) -> f64 {
        items_total(&self.items)
    }

    pub fn checkout_total(&self, service_fee: f64) -> f64 {
        self.total() + service_fee
    }

    pub fn checkout_summary(&self, service_fee: f64) -> CheckoutSummary {
        let subtotal = self.total();
        CheckoutSummary {
            subtotal,
            service_fee,
            total: subtotal + service_fee,
        }
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|entry| entry.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn line(id: &str, price: f64) -> CartItem {
        CartItem::new(MenuItem::new(id, id, price, "Mains"), "r1")
    }

    #[test]
    fn adding_same_item_twice_bumps_quantity() {
        let mut cart = Cart::new("guest_user");
        cart.add(line("m1", 10.0));
        cart.add(line("m1", 10.0));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.quantity_of("m1"), 2);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn add_ignores_incoming_quantity() {
        let mut cart = Cart::new("guest_user");
        cart.add(CartItem { quantity: 7, ..line("m1", 2.0) });
        assert_eq!(cart.quantity_of("m1"), 1);
    }

    #[test]
    fn remove_decrements_then_drops_line() {
        let mut cart = Cart::new("guest_user");
        cart.add(line("m1", 10.0));
        cart.add(line("m1", 10.0));

        cart.remove("m1");
        assert_eq!(cart.quantity_of("m1"), 1);
        cart.remove("m1");
        assert!(cart.is_empty());
        cart.remove("m1");
        assert!(cart.is_empty());
    }

    /// Small xorshift so generated sequences are reproducible from a seed.
    struct Ops(u64);

    impl Ops {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }
    }

    #[test]
    fn quantity_tracks_net_adds_for_generated_sequences() {
        const IDS: [&str; 4] = ["m1", "m2", "m3", "m4"];

        for seed in [1_u64, 7, 42, 1234, 0x9e37_79b9, 0xdead_beef] {
            let mut ops = Ops(seed);
            let mut cart = Cart::new("c1");
            let mut expected: HashMap<&str, i64> = HashMap::new();

            for step in 0..200 {
                let roll = ops.next();
                let id = IDS[(roll % IDS.len() as u64) as usize];
                let is_add = (roll >> 8) % 5 < 3;
                let count = expected.entry(id).or_insert(0);
                if is_add {
                    cart.add(line(id, 2.0));
                    *count += 1;
                } else {
                    cart.remove(id);
                    *count = (*count - 1).max(0);
                }

                for (id, count) in &expected {
                    assert_eq!(i64::from(cart.quantity_of(id)), *count, "seed {seed} step {step} item {id}");
                    assert_eq!(cart.items.iter().any(|entry| entry.id() == *id), *count > 0);
                }
                let units: i64 = expected.values().sum();
                assert_eq!(i64::from(cart.item_count()), units);
                assert_eq!(cart.total(), units as f64 * 2.0);
            }
        }
    }

    #[test]
    fn variant_selection_is_not_part_of_the_key() {
        let mut cart = Cart::new("c1");
        cart.add(line("m1", 4.0).with_selection(Some("Large".into()), None));
        cart.add(line("m1", 4.0).with_selection(Some("Regular".into()), Some(Temperature::Cold)));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].selected_size.as_deref(), Some("Large"));
        assert_eq!(cart.total(), 8.0);
    }

    #[test]
    fn checkout_adds_fee_outside_entry_sum() {
        let mut cart = Cart::new("c1");
        cart.add(line("m1", 10.0));
        cart.add(line("m2", 2.5));

        let summary = cart.checkout_summary(1.5);
        assert_eq!(summary.subtotal, 12.5);
        assert_eq!(summary.total, 14.0);
        assert_eq!(cart.checkout_total(1.5), 14.0);
        assert_eq!(cart.total(), 12.5);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn take_empties_cart() {
        let mut cart = Cart::new("c1");
        cart.add(line("m1", 10.0));
        let items = cart.take();
        assert_eq!(items.len(), 1);
        assert!(cart.is_empty());
    }
}
