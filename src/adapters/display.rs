use crate::domain::ports::CountDisplay;
use crate::utils::error::{CartError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Renders to stdout. The CLI's stand-in for a page element; it always exists.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl CountDisplay for ConsoleDisplay {
    fn set_text(&self, element_id: &str, text: &str) -> Result<()> {
        println!("{}: {}", element_id, text);
        Ok(())
    }
}

/// Fixed set of named elements holding text, used as the display double in
/// tests. Elements must be registered up front; writing to an unregistered
/// element fails the same way a missing page element would.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    elements: Mutex<HashMap<String, String>>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, element_id: &str) {
        if let Ok(mut elements) = self.elements.lock() {
            elements.entry(element_id.to_string()).or_default();
        }
    }

    pub fn text(&self, element_id: &str) -> Option<String> {
        let elements = self.elements.lock().ok()?;
        elements.get(element_id).cloned()
    }
}

impl CountDisplay for MemoryDisplay {
    fn set_text(&self, element_id: &str, text: &str) -> Result<()> {
        let mut elements = self
            .elements
            .lock()
            .map_err(|_| CartError::ProcessingError {
                message: "Display lock poisoned".to_string(),
            })?;

        match elements.get_mut(element_id) {
            Some(slot) => {
                *slot = text.to_string();
                Ok(())
            }
            None => Err(CartError::MissingElementError {
                element_id: element_id.to_string(),
            }),
        }
    }
}
