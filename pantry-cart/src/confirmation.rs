use chrono::{DateTime, Utc};
use pantry_catalog::Recipe;
use pantry_shared::Quantity;
use serde::{Deserialize, Serialize};

/// The transient selection step before a recipe's ingredients reach the cart.
///
/// The draft snapshots the recipe's ingredient list and owns the checkbox
/// state for each entry, so the committed selection is a subset of the recipe
/// by construction. Every ingredient starts selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationDraft {
    recipe_name: String,
    ingredients: Vec<String>,
    selected: Vec<bool>,
    quantity: Quantity,
    opened_at: DateTime<Utc>,
}

impl ConfirmationDraft {
    pub fn new(recipe: &Recipe, quantity: Quantity) -> Self {
        Self {
            recipe_name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            selected: vec![true; recipe.ingredients.len()],
            quantity,
            opened_at: Utc::now(),
        }
    }

    pub fn recipe_name(&self) -> &str {
        &self.recipe_name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Flip one checkbox; returns the new state, or `None` for an unknown row
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.selected.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    /// The checked ingredient names, in recipe order
    pub fn selected_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaghetti() -> Recipe {
        Recipe::new(
            "Spaghetti Bolognese".to_string(),
            vec![
                "Spaghetti".to_string(),
                "Onion".to_string(),
                "Garlic".to_string(),
            ],
            Some("4 servings".to_string()),
        )
    }

    #[test]
    fn test_everything_starts_selected() {
        let draft = ConfirmationDraft::new(&spaghetti(), Quantity::ONE);

        assert_eq!(draft.recipe_name(), "Spaghetti Bolognese");
        assert_eq!(draft.selected_count(), 3);
        assert!(draft.is_selected(0));
        assert_eq!(draft.selected_ingredients().len(), 3);
    }

    #[test]
    fn test_toggle_narrows_the_selection() {
        let mut draft = ConfirmationDraft::new(&spaghetti(), Quantity::ONE);

        // Uncheck the middle ingredient
        assert_eq!(draft.toggle(1), Some(false));
        assert_eq!(draft.selected_count(), 2);
        assert_eq!(
            draft.selected_ingredients(),
            vec!["Spaghetti".to_string(), "Garlic".to_string()]
        );

        // Checking it again restores recipe order, not toggle order
        assert_eq!(draft.toggle(1), Some(true));
        assert_eq!(draft.selected_ingredients()[1], "Onion");
    }

    #[test]
    fn test_unknown_row_is_rejected() {
        let mut draft = ConfirmationDraft::new(&spaghetti(), Quantity::ONE);

        assert_eq!(draft.toggle(3), None);
        assert!(!draft.is_selected(3));
    }

    #[test]
    fn test_ingredientless_recipe_yields_empty_draft() {
        let bare = Recipe::new("Chicken Stir Fry".to_string(), Vec::new(), None);
        let draft = ConfirmationDraft::new(&bare, Quantity::ONE);

        assert_eq!(draft.selected_count(), 0);
        assert!(draft.selected_ingredients().is_empty());
    }
}
