pub mod counter;
pub mod editor;
pub mod notify;

pub use crate::domain::model::LineItem;
pub use crate::domain::ports::{ConfigProvider, CountDisplay, KeyValueStore};
pub use crate::utils::error::Result;
pub use counter::CartCounter;
pub use editor::CartEditor;
pub use notify::{CartCountSubscription, NotifyingStore, StoreEvent};
