use crate::policy::PolicyError;
use pantry_cart::CartError;
use pantry_catalog::CatalogError;

/// Errors surfaced by session handlers
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Cart operation failed: {0}")]
    Cart(#[from] CartError),

    #[error("Invalid session policy: {0}")]
    Policy(#[from] PolicyError),
}
