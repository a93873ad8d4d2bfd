use chrono::{DateTime, Utc};
use pantry_shared::Quantity;
use serde::{Deserialize, Serialize};

/// One row in the cart: a named product and how many units of it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub quantity: Quantity,
    /// Recipe the line came from, for provenance display only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_recipe: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// A line added through the grocery path (no provenance)
    pub fn grocery(name: String, quantity: Quantity) -> Self {
        Self {
            name,
            quantity,
            source_recipe: None,
            added_at: Utc::now(),
        }
    }

    /// A line committed from a recipe confirmation
    pub fn from_recipe(name: String, quantity: Quantity, recipe: String) -> Self {
        Self {
            name,
            quantity,
            source_recipe: Some(recipe),
            added_at: Utc::now(),
        }
    }
}

/// The in-memory shopping cart: an ordered list of lines.
///
/// Starts empty each session; there is no persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add via the grocery path.
    ///
    /// Quantities accumulate on the first existing line with the same name,
    /// whatever its provenance; otherwise a new untagged line is appended.
    pub fn add_grocery_item(&mut self, name: &str, quantity: Quantity) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::grocery(name.to_string(), quantity));
        }
        self.updated_at = Utc::now();
    }

    /// Append one line per selected ingredient, each tagged with the recipe.
    ///
    /// Recipe lines never merge, not even with lines of the same name from an
    /// earlier confirmation. Returns how many lines were appended.
    pub fn append_recipe_selection(
        &mut self,
        recipe: &str,
        quantity: Quantity,
        ingredients: &[String],
    ) -> usize {
        for ingredient in ingredients {
            self.lines
                .push(CartLine::from_recipe(ingredient.clone(), quantity, recipe.to_string()));
        }
        if !ingredients.is_empty() {
            self.updated_at = Utc::now();
        }
        ingredients.len()
    }

    /// Remove the line at `index`; out-of-range is a silent no-op
    pub fn remove_line(&mut self, index: usize) -> Option<CartLine> {
        if index >= self.lines.len() {
            return None;
        }
        let line = self.lines.remove(index);
        self.updated_at = Utc::now();
        Some(line)
    }

    /// First line with the given name, if any
    pub fn find_line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    /// Number of lines (the cart badge number)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity.get()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
