//! # cart-buddy
//!
//! Domain core of a grocery storefront: a read-only catalog, per-session
//! carts, deal pricing and alternate-product matching.
//!
//! ## Layout
//!
//! - **Domain** - plain data and the cart ledger → [`domain::Product`], [`domain::Cart`], [`domain::Session`]
//! - **Catalog** - TOML-defined, validated once at startup → [`catalog::Catalog`]
//! - **Pricing and lookups** - pure functions over the catalog → [`discount`], [`filter`], [`similarity`]
//! - **Hosting** - sessions live in a [`actor_framework::ResourceActor`] and are
//!   driven through [`clients::StorefrontClient`]; [`app_system::StorefrontSystem`]
//!   owns startup and shutdown
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use cart_buddy::app_system::{StorefrontConfig, StorefrontSystem};
//! use cart_buddy::catalog::Catalog;
//!
//! let system = StorefrontSystem::new(StorefrontConfig::default(), Catalog::builtin()?);
//! let session = system.client.open_session("alice").await?;
//! system.client.add_to_cart(&session, "4").await?;
//! let total = system.client.total(&session).await?;
//! system.shutdown().await?;
//! # let _ = total;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod catalog;
pub mod clients;
pub mod deferred;
pub mod discount;
pub mod domain;
pub mod filter;
pub mod session_actor;
pub mod similarity;

#[cfg(test)]
mod mock_framework;
