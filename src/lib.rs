pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Command, CliConfig};
pub use config::FileConfig;

pub use adapters::{ConsoleDisplay, FileStore, MemoryDisplay, MemoryStore};
pub use core::{CartCountSubscription, CartCounter, CartEditor, LineItem, NotifyingStore};
pub use utils::error::{CartError, Result};
