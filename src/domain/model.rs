use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// One entry of the persisted cart. `quantity` is mandatory: a stored item
/// without a numeric quantity is rejected at parse time rather than counted
/// as zero. Fields this crate does not use are ignored on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl LineItem {
    pub fn new(quantity: u64) -> Self {
        Self {
            quantity,
            product_id: None,
            product_name: None,
            price: None,
        }
    }
}

/// Parse the raw stored cart value. An absent key reads as an empty cart;
/// a present but malformed value is an error that propagates to the caller.
pub fn parse_cart(raw: Option<&str>) -> Result<Vec<LineItem>> {
    match raw {
        None => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_str(value)?),
    }
}

pub fn cart_count(items: &[LineItem]) -> u64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of price * quantity over the items that carry a price.
pub fn cart_subtotal(items: &[LineItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| item.price.map(|price| price * item.quantity as f64))
        .sum()
}
