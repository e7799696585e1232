use rust_decimal::Decimal;
use tracing::debug;

use super::Product;

/// A line in the cart. Display fields are captured from the product at first
/// add and never refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub in_stock: bool,
    pub discount: Option<i64>,
    pub quantity: u32,
}

impl CartEntry {
    fn first_of(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            in_stock: product.in_stock,
            discount: product.discount,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Per-session ledger of chosen products, in insertion order.
///
/// Every entry has a positive quantity; dropping to zero removes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Adds one unit of `product`.
    pub fn add(&mut self, product: &Product) {
        match self.position(&product.id) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.quantity = entry.quantity.saturating_add(1);
                debug!(product_id = %entry.id, quantity = entry.quantity, "Incremented cart entry");
            }
            None => {
                self.entries.push(CartEntry::first_of(product));
                debug!(product_id = %product.id, "Added cart entry");
            }
        }
    }

    /// Sets the quantity to exactly `quantity`. Zero or below removes the entry.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(idx) = self.position(id) {
            self.entries[idx].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn increment(&mut self, id: &str) {
        if let Some(current) = self.quantity_of(id) {
            self.set_quantity(id, i64::from(current) + 1);
        }
    }

    pub fn decrement(&mut self, id: &str) {
        if let Some(current) = self.quantity_of(id) {
            self.set_quantity(id, i64::from(current) - 1);
        }
    }

    pub fn remove(&mut self, id: &str) {
        if let Some(idx) = self.position(id) {
            let entry = self.entries.remove(idx);
            debug!(product_id = %entry.id, "Removed cart entry");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Units in the cart, as shown on the badge. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.quantity)
            .fold(0, u32::saturating_add)
    }

    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.position(id).map(|idx| self.entries[idx].quantity)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> Product {
        Product::new("4", "Chicken Breast", Decimal::new(899, 2), "/images/chicken.jpeg", true)
    }

    fn milk() -> Product {
        Product::new("2", "Whole Milk", Decimal::new(348, 2), "/images/milk.jpg", true)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_twice_keeps_one_entry() {
        let mut cart = Cart::new();
        let product = milk();
        let before_total = cart.total();
        let before_count = cart.item_count();

        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.quantity_of("2"), Some(2));
        assert_eq!(cart.item_count(), before_count + 2);
        assert_eq!(cart.total(), before_total + product.price * Decimal::from(2));
    }

    #[test]
    fn test_add_three_chicken() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(&chicken());
        }

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].quantity, 3);
        assert_eq!(cart.total(), Decimal::new(2697, 2));
    }

    #[test]
    fn test_set_quantity_zero_matches_remove() {
        let mut by_set = Cart::new();
        by_set.add(&milk());
        by_set.add(&chicken());
        let mut by_remove = by_set.clone();

        by_set.set_quantity("2", 0);
        by_remove.remove("2");

        assert_eq!(by_set, by_remove);
        assert_eq!(by_set.quantity_of("2"), None);
        assert_eq!(by_set.total(), Decimal::new(899, 2));
        assert_eq!(by_set.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add(&milk());
        cart.set_quantity("2", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add(&milk());
        cart.add(&milk());
        cart.set_quantity("2", 5);
        assert_eq!(cart.quantity_of("2"), Some(5));
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add(&milk());
        let snapshot = cart.clone();

        cart.set_quantity("missing", 4);
        cart.remove("missing");
        cart.increment("missing");
        cart.decrement("missing");

        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&chicken());
        cart.add(&milk());
        cart.add(&chicken());

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "2"]);
    }

    #[test]
    fn test_decrement_last_unit_removes() {
        let mut cart = Cart::new();
        cart.add(&milk());
        cart.increment("2");
        assert_eq!(cart.quantity_of("2"), Some(2));

        cart.decrement("2");
        cart.decrement("2");
        assert_eq!(cart.quantity_of("2"), None);
    }

    #[test]
    fn test_captured_fields_not_refreshed() {
        let mut cart = Cart::new();
        cart.add(&milk());

        let mut repriced = milk();
        repriced.price = Decimal::new(999, 2);
        cart.add(&repriced);

        assert_eq!(cart.entries()[0].price, Decimal::new(348, 2));
        assert_eq!(cart.quantity_of("2"), Some(2));
    }

    #[test]
    fn test_quantities_saturate_at_limit() {
        let mut cart = Cart::new();
        cart.add(&milk());
        cart.set_quantity("2", i64::MAX);
        cart.add(&milk());
        cart.increment("2");
        assert_eq!(cart.quantity_of("2"), Some(u32::MAX));

        cart.add(&chicken());
        cart.set_quantity("4", 3_000_000_000);
        cart.set_quantity("2", 3_000_000_000);
        assert_eq!(cart.item_count(), u32::MAX);
        assert_eq!(cart.total(), Decimal::new(1237, 2) * Decimal::from(3_000_000_000u32));
    }
}
