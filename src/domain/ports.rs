use crate::utils::error::Result;
use async_trait::async_trait;

/// Page-scoped persistent key/value storage. Values are opaque strings;
/// the cart lives under one well-known key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Surface the count is rendered onto. Setting the text of an element that
/// does not exist is an error, not a silent no-op.
pub trait CountDisplay: Send + Sync {
    fn set_text(&self, element_id: &str, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_path(&self) -> &str;
    fn cart_key(&self) -> &str;
    fn element_id(&self) -> &str;
}
