pub mod quantity;

pub use quantity::{Quantity, QuantityError};
