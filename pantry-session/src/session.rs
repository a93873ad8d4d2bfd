use crate::error::SessionError;
use crate::policy::SessionPolicy;
use chrono::{DateTime, Utc};
use pantry_cart::{Cart, CartLine, CartManager, ConfirmationDraft};
use pantry_catalog::{Catalog, GroceryCategory, Recipe};
use pantry_shared::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Which browse section is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrowseTab {
    Recipes,
    Groceries,
}

/// All view-state for one shopper, owned explicitly by the controller.
///
/// Every mutation runs synchronously in one of these handlers; rendering
/// reads the state back through the accessors or [`crate::views`].
pub struct ShopperSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Catalog,
    policy: SessionPolicy,
    cart: CartManager,
    active_tab: BrowseTab,
    expanded_recipe: Option<usize>,
    expanded_category: Option<usize>,
    recipe_quantities: HashMap<usize, Quantity>,
    grocery_quantities: HashMap<(usize, usize), Quantity>,
    cart_open: bool,
}

impl ShopperSession {
    pub fn new(catalog: Catalog, policy: SessionPolicy) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(
            "Shopper session {} started ({} recipes, {} categories)",
            id,
            catalog.recipe_count(),
            catalog.category_count()
        );

        Self {
            id,
            started_at: Utc::now(),
            catalog,
            policy,
            cart: CartManager::new(),
            active_tab: BrowseTab::Recipes,
            expanded_recipe: None,
            expanded_category: None,
            recipe_quantities: HashMap::new(),
            grocery_quantities: HashMap::new(),
            cart_open: false,
        }
    }

    /// Session over the built-in catalog with default policy
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(), SessionPolicy::default())
    }

    /// Session over the built-in catalog with policy read from the environment
    pub fn from_env() -> Result<Self, SessionError> {
        let policy = SessionPolicy::load()?;
        Ok(Self::new(Catalog::seeded(), policy))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn policy(&self) -> &SessionPolicy {
        &self.policy
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.catalog.recipes()
    }

    pub fn categories(&self) -> &[GroceryCategory] {
        self.catalog.categories()
    }

    pub fn active_tab(&self) -> BrowseTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: BrowseTab) {
        tracing::debug!("Session {}: {:?} tab selected", self.id, tab);
        self.active_tab = tab;
    }

    /// Expand the recipe card, or collapse it if it is already open.
    /// At most one recipe is expanded at a time.
    pub fn toggle_recipe(&mut self, index: usize) -> Result<(), SessionError> {
        self.catalog.recipe(index)?;

        self.expanded_recipe = if self.expanded_recipe == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }

    /// Expand the category card, or collapse it if it is already open.
    pub fn toggle_category(&mut self, index: usize) -> Result<(), SessionError> {
        self.catalog.category(index)?;

        self.expanded_category = if self.expanded_category == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }

    pub fn expanded_recipe(&self) -> Option<usize> {
        self.expanded_recipe
    }

    pub fn expanded_category(&self) -> Option<usize> {
        self.expanded_category
    }

    /// Current stepper value for a recipe card (policy default until touched)
    pub fn recipe_quantity(&self, index: usize) -> Quantity {
        self.recipe_quantities
            .get(&index)
            .copied()
            .unwrap_or_else(|| self.policy.default_quantity())
    }

    /// Current stepper value for a grocery row (policy default until touched)
    pub fn grocery_quantity(&self, category: usize, item: usize) -> Quantity {
        self.grocery_quantities
            .get(&(category, item))
            .copied()
            .unwrap_or_else(|| self.policy.default_quantity())
    }

    pub fn increment_recipe_quantity(&mut self, index: usize) -> Result<Quantity, SessionError> {
        self.catalog.recipe(index)?;

        let next = self
            .recipe_quantity(index)
            .increment(self.policy.max_quantity());
        self.recipe_quantities.insert(index, next);
        Ok(next)
    }

    pub fn decrement_recipe_quantity(&mut self, index: usize) -> Result<Quantity, SessionError> {
        self.catalog.recipe(index)?;

        let next = self.recipe_quantity(index).decrement();
        self.recipe_quantities.insert(index, next);
        Ok(next)
    }

    pub fn increment_grocery_quantity(
        &mut self,
        category: usize,
        item: usize,
    ) -> Result<Quantity, SessionError> {
        self.catalog.grocery_item(category, item)?;

        let next = self
            .grocery_quantity(category, item)
            .increment(self.policy.max_quantity());
        self.grocery_quantities.insert((category, item), next);
        Ok(next)
    }

    pub fn decrement_grocery_quantity(
        &mut self,
        category: usize,
        item: usize,
    ) -> Result<Quantity, SessionError> {
        self.catalog.grocery_item(category, item)?;

        let next = self.grocery_quantity(category, item).decrement();
        self.grocery_quantities.insert((category, item), next);
        Ok(next)
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn toggle_cart_panel(&mut self) -> bool {
        self.cart_open = !self.cart_open;
        tracing::debug!("Session {}: cart panel open = {}", self.id, self.cart_open);
        self.cart_open
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    /// Number of lines shown on the cart badge (not summed units)
    pub fn cart_badge(&self) -> usize {
        self.cart.cart().line_count()
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmationDraft> {
        self.cart.pending_confirmation()
    }

    /// Add the grocery row's item at its current stepper quantity.
    /// A line with the same name absorbs the quantity instead of duplicating.
    pub fn add_grocery_to_cart(&mut self, category: usize, item: usize) -> Result<(), SessionError> {
        let name = self.catalog.grocery_item(category, item)?;
        let quantity = self.grocery_quantity(category, item);

        self.cart.add_grocery_item(name, quantity);
        tracing::info!("Session {}: added {} x{} to cart", self.id, name, quantity);
        Ok(())
    }

    /// Open the ingredient confirmation for a recipe at its stepper quantity.
    /// All ingredients start selected; a confirmation already on screen is
    /// replaced.
    pub fn request_recipe_add(&mut self, index: usize) -> Result<(), SessionError> {
        let recipe = self.catalog.recipe(index)?;
        let quantity = self.recipe_quantity(index);

        self.cart.open_confirmation(recipe, quantity);
        tracing::debug!(
            "Session {}: confirmation opened for {} x{}",
            self.id,
            recipe.name,
            quantity
        );
        Ok(())
    }

    /// Flip one ingredient row in the open confirmation
    pub fn toggle_confirmation_ingredient(&mut self, index: usize) -> Result<bool, SessionError> {
        Ok(self.cart.toggle_ingredient(index)?)
    }

    /// Dismiss the confirmation without touching the cart
    pub fn cancel_recipe_add(&mut self) {
        self.cart.cancel_confirmation();
        tracing::debug!("Session {}: confirmation cancelled", self.id);
    }

    /// Commit the selected ingredients as recipe-tagged cart lines
    pub fn confirm_recipe_add(&mut self) -> Result<usize, SessionError> {
        let appended = self.cart.confirm_selection()?;
        tracing::info!(
            "Session {}: confirmation committed {} line(s), cart at {}",
            self.id,
            appended,
            self.cart.cart().line_count()
        );
        Ok(appended)
    }

    /// Remove a cart line by position; an out-of-range index is ignored
    pub fn remove_cart_line(&mut self, index: usize) -> Option<CartLine> {
        let removed = self.cart.remove_line(index);
        match &removed {
            Some(line) => tracing::info!("Session {}: removed {} from cart", self.id, line.name),
            None => tracing::debug!(
                "Session {}: ignored removal of missing line {}",
                self.id,
                index
            ),
        }
        removed
    }
}

impl Default for ShopperSession {
    fn default() -> Self {
        Self::seeded()
    }
}
