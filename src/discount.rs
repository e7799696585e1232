//! Display values for promotional products.
//!
//! A deal's `price` is what the shopper pays. The struck-through "original"
//! price is derived from it, and is only rounded when rendered.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Product;

/// Currency precision used for display.
pub const DISPLAY_DECIMALS: u32 = 2;

/// `price × (1 + discount/100)`, unrounded. `None` when the product carries no discount.
pub fn original_price(product: &Product) -> Option<Decimal> {
    let percent = Decimal::from(product.discount?);
    Some(product.price * (Decimal::ONE_HUNDRED + percent) / Decimal::ONE_HUNDRED)
}

/// Difference between the original and the current price.
pub fn savings(product: &Product) -> Option<Decimal> {
    original_price(product).map(|original| original - product.price)
}

pub fn display_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as dollars, e.g. `$5.74`.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", display_amount(amount))
}
