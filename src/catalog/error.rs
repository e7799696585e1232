use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while loading a catalog definition. All of them are fatal at
/// startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog definition: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Product has an empty id: {0:?}")]
    EmptyId(String),
    #[error("Negative price for product {id}: {price}")]
    NegativePrice { id: String, price: Decimal },
    #[error("Discount out of range for product {id}: {discount}%")]
    DiscountOutOfRange { id: String, discount: i64 },
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
    #[error("Promotional product has no discount: {0}")]
    MissingDiscount(String),
    #[error("Non-promotional product carries a discount: {0}")]
    UnexpectedDiscount(String),
    #[error("Alternates listed twice for product name: {0}")]
    DuplicateOverride(String),
    #[error("Blank similarity keyword")]
    BlankKeyword,
}
