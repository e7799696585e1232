use rust_decimal::Decimal;

use crate::domain::{CartEntry, Product};

/// Cart operations performed on a session.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of the product.
    Add(Product),
    /// Sets an absolute quantity; zero or below removes the entry.
    SetQuantity { product_id: String, quantity: i64 },
    Remove(String),
    Increment(String),
    Decrement(String),
    Clear,
    Total,
    ItemCount,
    Entries,
}

/// Totals re-read right after a mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub total: Decimal,
    pub item_count: u32,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    Add(CartSummary),
    SetQuantity(CartSummary),
    Remove(CartSummary),
    Increment(CartSummary),
    Decrement(CartSummary),
    Clear(CartSummary),
    Total(Decimal),
    ItemCount(u32),
    Entries(Vec<CartEntry>),
}
