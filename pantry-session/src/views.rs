use crate::session::{BrowseTab, ShopperSession};
use chrono::{DateTime, Utc};
use pantry_cart::CartLine;
use pantry_shared::Quantity;
use serde::Serialize;
use uuid::Uuid;

/// Renderer-facing snapshot of a whole session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub active_tab: BrowseTab,
    pub expanded_recipe: Option<usize>,
    pub expanded_category: Option<usize>,
    pub cart_open: bool,
    pub cart: CartView,
    pub confirmation: Option<ConfirmationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    /// Line count shown on the cart badge
    pub badge: usize,
    pub total_quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationView {
    pub recipe_name: String,
    pub quantity: Quantity,
    pub ingredients: Vec<IngredientRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngredientRow {
    pub name: String,
    pub selected: bool,
}

impl ShopperSession {
    /// Capture the current state for rendering
    pub fn view(&self) -> SessionView {
        let cart = self.cart();

        SessionView {
            session_id: self.id(),
            started_at: self.started_at(),
            active_tab: self.active_tab(),
            expanded_recipe: self.expanded_recipe(),
            expanded_category: self.expanded_category(),
            cart_open: self.is_cart_open(),
            cart: CartView {
                lines: cart.lines.clone(),
                badge: cart.line_count(),
                total_quantity: cart.total_quantity(),
            },
            confirmation: self.pending_confirmation().map(|draft| ConfirmationView {
                recipe_name: draft.recipe_name().to_string(),
                quantity: draft.quantity(),
                ingredients: draft
                    .ingredients()
                    .iter()
                    .enumerate()
                    .map(|(index, name)| IngredientRow {
                        name: name.clone(),
                        selected: draft.is_selected(index),
                    })
                    .collect(),
            }),
        }
    }
}
