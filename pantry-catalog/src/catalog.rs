use crate::grocery::GroceryCategory;
use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// Browse-ordered recipe and grocery listings.
///
/// Rows are addressed by their display position, so both collections keep
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    categories: Vec<GroceryCategory>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, categories: Vec<GroceryCategory>) -> Self {
        Self {
            recipes,
            categories,
        }
    }

    /// The built-in demo catalog shipped with the engine
    pub fn seeded() -> Self {
        Self::new(seed_recipes(), seed_categories())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn categories(&self) -> &[GroceryCategory] {
        &self.categories
    }

    /// Get a recipe by its display position
    pub fn recipe(&self, index: usize) -> Result<&Recipe, CatalogError> {
        self.recipes
            .get(index)
            .ok_or(CatalogError::RecipeNotFound(index))
    }

    /// Get a grocery category by its display position
    pub fn category(&self, index: usize) -> Result<&GroceryCategory, CatalogError> {
        self.categories
            .get(index)
            .ok_or(CatalogError::CategoryNotFound(index))
    }

    /// Resolve a grocery item name from its category and row positions
    pub fn grocery_item(&self, category: usize, item: usize) -> Result<&str, CatalogError> {
        self.category(category)?
            .item(item)
            .ok_or(CatalogError::ItemNotFound(category, item))
    }

    /// Look up a recipe by name
    pub fn find_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Spaghetti Bolognese".to_string(),
            items(&[
                "Spaghetti",
                "Ground beef",
                "Tomato sauce",
                "Onion",
                "Garlic",
                "Olive oil",
                "Salt",
                "Pepper",
            ]),
            Some("4 servings".to_string()),
        ),
        Recipe::new("Chicken Stir Fry".to_string(), Vec::new(), None),
        Recipe::new("Vegetable Curry".to_string(), Vec::new(), None),
    ]
}

fn seed_categories() -> Vec<GroceryCategory> {
    vec![
        GroceryCategory::new(
            "Fruits & Vegetables".to_string(),
            items(&[
                "Apples",
                "Bananas",
                "Carrots",
                "Broccoli",
                "Tomatoes",
                "Spinach",
                "Oranges",
                "Potatoes",
            ]),
        ),
        GroceryCategory::new("Dairy & Eggs".to_string(), Vec::new()),
        GroceryCategory::new("Most Bought".to_string(), Vec::new()),
        GroceryCategory::new("Seasonal Items".to_string(), Vec::new()),
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No recipe at position {0}")]
    RecipeNotFound(usize),

    #[error("No grocery category at position {0}")]
    CategoryNotFound(usize),

    #[error("No item at position {1} in category {0}")]
    ItemNotFound(usize, usize),
}
