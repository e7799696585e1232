#[macro_use]
mod macros;
pub mod storefront_client;

pub use storefront_client::*;
