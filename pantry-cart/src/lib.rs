pub mod models;
pub mod confirmation;
pub mod manager;

pub use models::{Cart, CartLine};
pub use confirmation::ConfirmationDraft;
pub use manager::{CartError, CartManager};
