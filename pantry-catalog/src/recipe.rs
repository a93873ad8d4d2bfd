use serde::{Deserialize, Serialize};

/// A browsable recipe: a named, ordered list of ingredients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub portion_size: Option<String>,
}

impl Recipe {
    pub fn new(name: String, ingredients: Vec<String>, portion_size: Option<String>) -> Self {
        Self {
            name,
            ingredients,
            portion_size,
        }
    }

    /// Check whether an ingredient belongs to this recipe
    pub fn contains_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_membership() {
        let recipe = Recipe::new(
            "Spaghetti Bolognese".to_string(),
            vec!["Spaghetti".to_string(), "Onion".to_string()],
            Some("4 servings".to_string()),
        );

        assert!(recipe.contains_ingredient("Onion"));
        assert!(!recipe.contains_ingredient("Basil"));
        assert_eq!(recipe.ingredient_count(), 2);
    }
}
