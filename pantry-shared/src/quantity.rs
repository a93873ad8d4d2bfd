use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive item count.
///
/// Cart lines and quantity steppers always carry at least one unit; steppers
/// clamp at their bounds instead of failing, while merged cart quantities
/// accumulate without an upper cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The stepper starting value.
    pub const ONE: Quantity = Quantity(1);

    /// Default ceiling for quantity steppers.
    pub const DEFAULT_STEPPER_MAX: Quantity = Quantity(10);

    pub fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Accumulate a merged add; the merged total is never capped.
    pub fn saturating_add(self, other: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(other.0))
    }

    /// Stepper plus: one more unit, ceiling at `max`.
    pub fn increment(self, max: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(1).min(max.0))
    }

    /// Stepper minus: one less unit, floor at one.
    pub fn decrement(self) -> Quantity {
        Quantity(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> u32 {
        quantity.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuantityError {
    #[error("Quantity must be at least 1")]
    Zero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero() {
        assert!(Quantity::new(0).is_err());
        assert_eq!(Quantity::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_stepper_clamps() {
        let max = Quantity::new(10).unwrap();

        // Plus stops at the ceiling
        let mut value = Quantity::new(9).unwrap();
        value = value.increment(max);
        assert_eq!(value.get(), 10);
        value = value.increment(max);
        assert_eq!(value.get(), 10);

        // Minus stops at one
        let mut value = Quantity::new(2).unwrap();
        value = value.decrement();
        assert_eq!(value.get(), 1);
        value = value.decrement();
        assert_eq!(value.get(), 1);
    }

    #[test]
    fn test_merge_accumulates_past_stepper_max() {
        let a = Quantity::new(8).unwrap();
        let b = Quantity::new(7).unwrap();

        // A merged cart line may exceed any stepper ceiling
        assert_eq!(a.saturating_add(b).get(), 15);
    }

    #[test]
    fn test_serde_round_trip() {
        let quantity = Quantity::new(5).unwrap();
        let json = serde_json::to_string(&quantity).unwrap();
        assert_eq!(json, "5");

        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quantity);

        // Zero is rejected on the way in
        let zero: Result<Quantity, _> = serde_json::from_str("0");
        assert!(zero.is_err());
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(Quantity::default(), Quantity::ONE);
        assert_eq!(Quantity::ONE.to_string(), "1");
    }
}
