use serde::{Deserialize, Serialize};

/// A browsable grocery section, e.g. "Fruits & Vegetables"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryCategory {
    pub name: String,
    pub items: Vec<String>,
}

impl GroceryCategory {
    pub fn new(name: String, items: Vec<String>) -> Self {
        Self { name, items }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Get an item name by its row position
    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|s| s.as_str())
    }
}
