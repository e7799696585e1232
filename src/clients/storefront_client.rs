use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::app_system::StorefrontError;
use crate::catalog::Catalog;
use crate::discount;
use crate::domain::{CartEntry, Product, SelectionPatch, Session, SessionCreate};
use crate::filter;
use crate::session_actor::{CartAction, CartActionResult, CartSummary};
use crate::similarity::SimilarityMatcher;

/// Entry point for the view layer.
///
/// Catalog reads are answered locally from the shared catalog. Anything that
/// touches a session resolves product ids first, then goes through the
/// session actor.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: ResourceClient<Session>,
    catalog: Arc<Catalog>,
}

impl StorefrontClient {
    pub fn new(inner: ResourceClient<Session>, catalog: Arc<Catalog>) -> Self {
        Self { inner, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn resolve(&self, product_id: &str) -> Result<&Product, StorefrontError> {
        self.catalog.find(product_id).ok_or_else(|| {
            warn!(product_id, "Unknown product");
            StorefrontError::ProductNotFound(product_id.to_string())
        })
    }

    // --- Catalog reads ---

    #[instrument(skip(self))]
    pub fn listing(&self, query: &str) -> Vec<Product> {
        let listed: Vec<Product> = filter::filter(&self.catalog, query).into_iter().cloned().collect();
        debug!(count = listed.len(), "Listing filtered");
        listed
    }

    pub fn deals(&self) -> &[Product] {
        self.catalog.get_promotional()
    }

    /// Curated alternates keyed by exact product name.
    pub fn alternates_table(&self) -> &BTreeMap<String, Vec<Product>> {
        self.catalog.get_alternates()
    }

    pub fn original_price(&self, product_id: &str) -> Result<Decimal, StorefrontError> {
        let product = self.resolve(product_id)?;
        discount::original_price(product).ok_or_else(|| StorefrontError::NotDiscounted(product_id.to_string()))
    }

    // --- Sessions ---

    #[instrument(skip(self))]
    pub async fn open_session(&self, shopper: &str) -> Result<String, StorefrontError> {
        debug!("Sending request");
        let id = self
            .inner
            .create(SessionCreate { shopper: shopper.to_string() })
            .await?;
        info!(session_id = %id, "Session opened");
        Ok(id)
    }

    // --- Cart ---

    async fn mutate(&self, session_id: &str, action: CartAction) -> Result<CartSummary, StorefrontError> {
        debug!("Sending request");
        match self.inner.perform_action(session_id.to_string(), action).await? {
            CartActionResult::Add(summary)
            | CartActionResult::SetQuantity(summary)
            | CartActionResult::Remove(summary)
            | CartActionResult::Increment(summary)
            | CartActionResult::Decrement(summary)
            | CartActionResult::Clear(summary) => Ok(summary),
            other => Err(StorefrontError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, session_id: &str, product_id: &str) -> Result<CartSummary, StorefrontError> {
        let product = self.resolve(product_id)?.clone();
        let summary = self.mutate(session_id, CartAction::Add(product)).await?;
        info!(item_count = summary.item_count, total = %summary.total, "Added to cart");
        Ok(summary)
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        session_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> Result<CartSummary, StorefrontError> {
        let action = CartAction::SetQuantity { product_id: product_id.to_string(), quantity };
        self.mutate(session_id, action).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, session_id: &str, product_id: &str) -> Result<CartSummary, StorefrontError> {
        self.mutate(session_id, CartAction::Remove(product_id.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, session_id: &str, product_id: &str) -> Result<CartSummary, StorefrontError> {
        self.mutate(session_id, CartAction::Increment(product_id.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn decrement(&self, session_id: &str, product_id: &str) -> Result<CartSummary, StorefrontError> {
        self.mutate(session_id, CartAction::Decrement(product_id.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, session_id: &str) -> Result<CartSummary, StorefrontError> {
        self.mutate(session_id, CartAction::Clear).await
    }

    #[instrument(skip(self))]
    pub async fn total(&self, session_id: &str) -> Result<Decimal, StorefrontError> {
        debug!("Sending request");
        match self.inner.perform_action(session_id.to_string(), CartAction::Total).await? {
            CartActionResult::Total(total) => Ok(total),
            other => Err(StorefrontError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn item_count(&self, session_id: &str) -> Result<u32, StorefrontError> {
        debug!("Sending request");
        match self.inner.perform_action(session_id.to_string(), CartAction::ItemCount).await? {
            CartActionResult::ItemCount(count) => Ok(count),
            other => Err(StorefrontError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn cart_entries(&self, session_id: &str) -> Result<Vec<CartEntry>, StorefrontError> {
        debug!("Sending request");
        match self.inner.perform_action(session_id.to_string(), CartAction::Entries).await? {
            CartActionResult::Entries(entries) => Ok(entries),
            other => Err(StorefrontError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    // --- Selection ---

    /// Matches alternates for `product_id` and opens them in the session's modal.
    #[instrument(skip(self))]
    pub async fn find_alternates(&self, session_id: &str, product_id: &str) -> Result<Vec<Product>, StorefrontError> {
        let product = self.resolve(product_id)?.clone();
        let options = SimilarityMatcher::new(&self.catalog).find(&product);

        let patch = SelectionPatch::ShowAlternates { product, options: options.clone() };
        self.inner.update(session_id.to_string(), patch).await?;
        info!(count = options.len(), "Alternates shown");
        Ok(options)
    }

    #[instrument(skip(self))]
    pub async fn select_product(&self, session_id: &str, product_id: &str) -> Result<Session, StorefrontError> {
        let product = self.resolve(product_id)?.clone();
        Ok(self.inner.update(session_id.to_string(), SelectionPatch::Open(product)).await?)
    }

    #[instrument(skip(self))]
    pub async fn close_selection(&self, session_id: &str) -> Result<Session, StorefrontError> {
        Ok(self.inner.update(session_id.to_string(), SelectionPatch::Close).await?)
    }
}

impl_client_methods!(StorefrontClient, Session, StorefrontError, session);
