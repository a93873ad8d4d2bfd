use crate::confirmation::ConfirmationDraft;
use crate::models::{Cart, CartLine};
use pantry_catalog::Recipe;
use pantry_shared::Quantity;

/// Owns the cart and the recipe-confirmation state machine.
///
/// Confirmation flow: Idle -> Pending on open, Pending -> Idle on cancel, or
/// Pending -> Idle plus the cart mutation on confirm. No other states.
pub struct CartManager {
    cart: Cart,
    confirmation: Option<ConfirmationDraft>,
}

impl CartManager {
    pub fn new() -> Self {
        Self {
            cart: Cart::new(),
            confirmation: None,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add via the grocery path: merge by name or append (no gating)
    pub fn add_grocery_item(&mut self, name: &str, quantity: Quantity) {
        self.cart.add_grocery_item(name, quantity);
    }

    /// Remove the line at `index`; out-of-range is a silent no-op
    pub fn remove_line(&mut self, index: usize) -> Option<CartLine> {
        self.cart.remove_line(index)
    }

    /// Idle -> Pending: stage a recipe with every ingredient selected.
    ///
    /// Opening while a draft is already pending replaces it.
    pub fn open_confirmation(&mut self, recipe: &Recipe, quantity: Quantity) {
        self.confirmation = Some(ConfirmationDraft::new(recipe, quantity));
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmationDraft> {
        self.confirmation.as_ref()
    }

    /// Flip one ingredient checkbox on the pending draft
    pub fn toggle_ingredient(&mut self, index: usize) -> Result<bool, CartError> {
        let draft = self
            .confirmation
            .as_mut()
            .ok_or(CartError::NoPendingConfirmation)?;

        draft
            .toggle(index)
            .ok_or(CartError::UnknownIngredient(index))
    }

    /// Pending -> Idle without touching the cart; no-op when idle
    pub fn cancel_confirmation(&mut self) {
        self.confirmation = None;
    }

    /// Pending -> Idle, appending one cart line per selected ingredient.
    ///
    /// Returns how many lines were appended.
    pub fn confirm_selection(&mut self) -> Result<usize, CartError> {
        let draft = self
            .confirmation
            .take()
            .ok_or(CartError::NoPendingConfirmation)?;

        let selected = draft.selected_ingredients();
        let appended =
            self.cart
                .append_recipe_selection(draft.recipe_name(), draft.quantity(), &selected);
        Ok(appended)
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("No recipe confirmation is pending")]
    NoPendingConfirmation,

    #[error("No ingredient at position {0} in the pending confirmation")]
    UnknownIngredient(usize),
}
