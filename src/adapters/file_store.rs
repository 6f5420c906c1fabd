use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use crate::utils::validation;
use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key/value store with one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: String,
}

impl FileStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        validation::validate_store_key("key", key)?;
        Ok(Path::new(&self.base_path).join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
