pub mod error;
pub mod policy;
pub mod session;
pub mod telemetry;
pub mod views;

pub use error::SessionError;
pub use policy::{PolicyError, SessionPolicy};
pub use session::{BrowseTab, ShopperSession};
pub use views::{CartView, ConfirmationView, SessionView};
