use rust_decimal::Decimal;
use serde::Deserialize;

/// Id prefix reserved for records that are only reachable through the
/// alternates table.
pub const ALTERNATE_PREFIX: &str = "alt-";

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub in_stock: bool,
    /// Percent off, only present on promotional records. Catalog validation
    /// keeps it within `0..=100`.
    #[serde(default)]
    pub discount: Option<i64>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            in_stock,
            discount: None,
        }
    }

    /// Same product, carrying a promotional discount.
    pub fn with_discount(mut self, percent: i64) -> Self {
        self.discount = Some(percent);
        self
    }

    pub fn is_alternate(&self) -> bool {
        self.id.starts_with(ALTERNATE_PREFIX)
    }

    pub fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }
}
