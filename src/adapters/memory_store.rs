use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory key/value store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        Ok(())
    }
}
