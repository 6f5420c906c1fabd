use anyhow::Result;
use cart_count::core::{ConfigProvider, KeyValueStore};
use cart_count::{CartCounter, CartError, MemoryDisplay, MemoryStore};
use std::sync::Arc;

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

fn badge() -> (
    Arc<MemoryStore>,
    Arc<MemoryDisplay>,
    CartCounter<MemoryStore, MemoryDisplay>,
) {
    let store = Arc::new(MemoryStore::new());
    let display = Arc::new(MemoryDisplay::new());
    display.register("cart-count");
    let counter = CartCounter::new(store.clone(), display.clone(), &TestConfig);
    (store, display, counter)
}

#[tokio::test]
async fn test_absent_cart_renders_zero() -> Result<()> {
    let (_store, display, counter) = badge();

    let count = counter.initialize().await?;

    assert_eq!(count, 0);
    assert_eq!(display.text("cart-count").as_deref(), Some("0"));
    Ok(())
}

#[tokio::test]
async fn test_empty_cart_renders_zero() -> Result<()> {
    let (store, display, counter) = badge();
    store.set("cart", "[]").await?;

    counter.initialize().await?;

    assert_eq!(display.text("cart-count").as_deref(), Some("0"));
    Ok(())
}

#[tokio::test]
async fn test_count_sums_quantities() -> Result<()> {
    let (store, display, counter) = badge();
    store
        .set("cart", r#"[{"quantity": 2}, {"quantity": 3}]"#)
        .await?;

    let count = counter.initialize().await?;

    assert_eq!(count, 5);
    assert_eq!(display.text("cart-count").as_deref(), Some("5"));
    Ok(())
}

#[tokio::test]
async fn test_count_sums_many_quantities() -> Result<()> {
    let (store, display, counter) = badge();
    store
        .set(
            "cart",
            r#"[{"quantity": 0}, {"quantity": 1}, {"quantity": 4}, {"quantity": 7}]"#,
        )
        .await?;

    counter.recompute_and_display().await?;

    assert_eq!(display.text("cart-count").as_deref(), Some("12"));
    Ok(())
}

#[tokio::test]
async fn test_count_ignores_fields_it_does_not_use() -> Result<()> {
    let (store, display, counter) = badge();
    store
        .set(
            "cart",
            r#"[
                {"product_id": 1, "product_name": "Widget", "price": 29.99, "quantity": 2},
                {"product_id": 2, "product_name": "Gadget", "price": 49.99, "quantity": 1, "category": "tools"}
            ]"#,
        )
        .await?;

    counter.recompute_and_display().await?;

    assert_eq!(display.text("cart-count").as_deref(), Some("3"));
    Ok(())
}

#[tokio::test]
async fn test_recompute_is_idempotent() -> Result<()> {
    let (store, display, counter) = badge();
    store
        .set("cart", r#"[{"quantity": 2}, {"quantity": 3}]"#)
        .await?;

    let first = counter.recompute_and_display().await?;
    let second = counter.recompute_and_display().await?;

    assert_eq!(first, second);
    assert_eq!(display.text("cart-count").as_deref(), Some("5"));
    Ok(())
}

#[tokio::test]
async fn test_removed_key_counts_as_empty_again() -> Result<()> {
    let (store, display, counter) = badge();
    store.set("cart", r#"[{"quantity": 5}]"#).await?;
    counter.recompute_and_display().await?;
    assert_eq!(display.text("cart-count").as_deref(), Some("5"));

    store.remove("cart").await?;
    counter.recompute_and_display().await?;

    assert_eq!(display.text("cart-count").as_deref(), Some("0"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_cart_is_an_error() -> Result<()> {
    let (store, display, counter) = badge();
    store.set("cart", "not json at all").await?;

    let err = counter.recompute_and_display().await.unwrap_err();

    assert!(matches!(err, CartError::SerializationError(_)));
    // The display is untouched on failure.
    assert_eq!(display.text("cart-count").as_deref(), Some(""));
    Ok(())
}

#[tokio::test]
async fn test_item_without_quantity_is_an_error() -> Result<()> {
    let (store, _display, counter) = badge();
    store
        .set("cart", r#"[{"product_id": 1, "price": 9.99}]"#)
        .await?;

    let err = counter.recompute_and_display().await.unwrap_err();

    assert!(matches!(err, CartError::SerializationError(_)));
    Ok(())
}

#[tokio::test]
async fn test_missing_display_element_is_an_error() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let display = Arc::new(MemoryDisplay::new());
    // No "cart-count" element registered.
    let counter = CartCounter::new(store, display, &TestConfig);

    let err = counter.initialize().await.unwrap_err();

    match err {
        CartError::MissingElementError { element_id } => assert_eq!(element_id, "cart-count"),
        other => panic!("unexpected error: {}", other),
    }
    Ok(())
}
