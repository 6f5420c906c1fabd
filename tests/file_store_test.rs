use anyhow::Result;
use cart_count::core::{ConfigProvider, KeyValueStore};
use cart_count::{
    CartCountSubscription, CartCounter, FileStore, MemoryDisplay, NotifyingStore,
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio_test::assert_ok;

struct TestConfig;

impl ConfigProvider for TestConfig {
    fn store_path(&self) -> &str {
        "unused"
    }

    fn cart_key(&self) -> &str {
        "cart"
    }

    fn element_id(&self) -> &str {
        "cart-count"
    }
}

fn store_in(temp_dir: &TempDir) -> FileStore {
    FileStore::new(temp_dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_set_then_get_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_in(&temp_dir);

    tokio_test::assert_ok!(store.set("cart", r#"[{"quantity": 1}]"#).await);

    assert_eq!(
        store.get("cart").await?.as_deref(),
        Some(r#"[{"quantity": 1}]"#)
    );
    assert!(temp_dir.path().join("cart.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_get_missing_key_is_none() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_in(&temp_dir);

    assert_eq!(store.get("cart").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_set_overwrites() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_in(&temp_dir);

    store.set("cart", "[]").await?;
    store.set("cart", r#"[{"quantity": 9}]"#).await?;

    assert_eq!(
        store.get("cart").await?.as_deref(),
        Some(r#"[{"quantity": 9}]"#)
    );
    Ok(())
}

#[tokio::test]
async fn test_remove_is_idempotent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_in(&temp_dir);

    store.set("cart", "[]").await?;
    store.remove("cart").await?;
    store.remove("cart").await?;

    assert_eq!(store.get("cart").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_keys_must_be_single_path_components() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_in(&temp_dir);

    assert!(store.set("a/b", "x").await.is_err());
    assert!(store.set("..", "x").await.is_err());
    assert!(store.set("", "x").await.is_err());
    assert!(store.get("a\\b").await.is_err());
    Ok(())
}

// End-to-end over real files: initialize renders the stored total, a later
// cart write re-renders through the subscription, a foreign key does not.
#[tokio::test]
async fn test_end_to_end_badge_over_file_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = Arc::new(NotifyingStore::new(store_in(&temp_dir)));
    let display = Arc::new(MemoryDisplay::new());
    display.register("cart-count");
    let counter = CartCounter::new(store.clone(), display.clone(), &TestConfig);
    let mut subscription = CartCountSubscription::new(store.subscribe(), counter.clone());

    store
        .set("cart", r#"[{"quantity": 2}, {"quantity": 3}]"#)
        .await?;
    counter.initialize().await?;
    assert_eq!(display.text("cart-count").as_deref(), Some("5"));

    store.set("cart", r#"[{"quantity": 10}]"#).await?;
    subscription.process_pending().await?;
    assert_eq!(display.text("cart-count").as_deref(), Some("10"));

    store.set("session", "abc123").await?;
    subscription.process_pending().await?;
    assert_eq!(display.text("cart-count").as_deref(), Some("10"));
    Ok(())
}
