use crate::core::{ConfigProvider, KeyValueStore};
use crate::domain::model::{self, LineItem};
use crate::utils::error::{CartError, Result};
use std::sync::Arc;

/// Cart mutations on behalf of the larger application. Every change is
/// serialized and written back through the store, so a `NotifyingStore`
/// underneath makes each edit drive the badge.
pub struct CartEditor<S: KeyValueStore> {
    store: Arc<S>,
    cart_key: String,
}

impl<S: KeyValueStore> CartEditor<S> {
    pub fn new(store: Arc<S>, config: &dyn ConfigProvider) -> Self {
        Self {
            store,
            cart_key: config.cart_key().to_string(),
        }
    }

    pub async fn items(&self) -> Result<Vec<LineItem>> {
        let raw = self.store.get(&self.cart_key).await?;
        model::parse_cart(raw.as_deref())
    }

    pub async fn subtotal(&self) -> Result<f64> {
        Ok(model::cart_subtotal(&self.items().await?))
    }

    /// Add a line item. Items carrying the same product id are merged by
    /// summing quantities; items without a product id are always appended.
    pub async fn add_item(&self, item: LineItem) -> Result<()> {
        let mut items = self.items().await?;

        let existing = item
            .product_id
            .and_then(|id| items.iter().position(|line| line.product_id == Some(id)));

        match existing {
            Some(index) => items[index].quantity += item.quantity,
            None => items.push(item),
        }

        self.save(&items).await
    }

    /// Set the quantity of an existing line item. Quantity 0 removes it.
    pub async fn set_quantity(&self, product_id: i64, quantity: u64) -> Result<()> {
        let mut items = self.items().await?;

        let position = items
            .iter()
            .position(|line| line.product_id == Some(product_id))
            .ok_or(CartError::ItemNotFoundError { product_id })?;

        if quantity == 0 {
            items.remove(position);
        } else {
            items[position].quantity = quantity;
        }

        self.save(&items).await
    }

    pub async fn remove_item(&self, product_id: i64) -> Result<()> {
        let mut items = self.items().await?;

        let position = items
            .iter()
            .position(|line| line.product_id == Some(product_id))
            .ok_or(CartError::ItemNotFoundError { product_id })?;

        items.remove(position);
        self.save(&items).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.save(&[]).await
    }

    async fn save(&self, items: &[LineItem]) -> Result<()> {
        let payload = serde_json::to_string(items)?;
        tracing::debug!("Writing cart: {} line item(s)", items.len());
        self.store.set(&self.cart_key, &payload).await
    }
}
