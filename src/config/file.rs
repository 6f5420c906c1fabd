use crate::utils::error::{CartError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML config file overriding the store settings, e.g.:
///
/// ```toml
/// [store]
/// path = "/var/lib/shop/store"
/// cart_key = "cart"
/// element_id = "cart-count"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub store: StoreSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
    pub cart_key: Option<String>,
    pub element_id: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        Ok(config)
    }
}
