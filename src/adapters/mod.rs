// Adapters layer: concrete implementations for the external surfaces
// (file-backed and in-memory stores, display backends).

pub mod display;
pub mod file_store;
pub mod memory_store;

pub use display::{ConsoleDisplay, MemoryDisplay};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
