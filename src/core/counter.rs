use crate::core::{ConfigProvider, CountDisplay, KeyValueStore};
use crate::domain::model;
use crate::utils::error::Result;
use std::sync::Arc;

/// Reads the stored cart, sums line item quantities and renders the total
/// into the configured display element.
pub struct CartCounter<S: KeyValueStore, D: CountDisplay> {
    store: Arc<S>,
    display: Arc<D>,
    cart_key: String,
    element_id: String,
}

impl<S: KeyValueStore, D: CountDisplay> CartCounter<S, D> {
    pub fn new(store: Arc<S>, display: Arc<D>, config: &dyn ConfigProvider) -> Self {
        Self {
            store,
            display,
            cart_key: config.cart_key().to_string(),
            element_id: config.element_id().to_string(),
        }
    }

    pub fn cart_key(&self) -> &str {
        &self.cart_key
    }

    /// One-shot startup hook: render the count once.
    pub async fn initialize(&self) -> Result<u64> {
        tracing::debug!("Initial cart count render");
        self.recompute_and_display().await
    }

    /// Recompute the count from the store and render it. An absent cart key
    /// counts as an empty cart; a malformed stored value propagates as an
    /// error without touching the display.
    pub async fn recompute_and_display(&self) -> Result<u64> {
        let raw = self.store.get(&self.cart_key).await?;
        let items = model::parse_cart(raw.as_deref())?;
        let count = model::cart_count(&items);

        tracing::debug!(
            "Cart count recomputed: {} line item(s), total {}",
            items.len(),
            count
        );

        self.display.set_text(&self.element_id, &count.to_string())?;
        Ok(count)
    }
}

impl<S: KeyValueStore, D: CountDisplay> Clone for CartCounter<S, D> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            display: self.display.clone(),
            cart_key: self.cart_key.clone(),
            element_id: self.element_id.clone(),
        }
    }
}
