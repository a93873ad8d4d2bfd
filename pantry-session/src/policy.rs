use pantry_shared::Quantity;
use serde::Deserialize;

/// Stepper tunables for a shopper session.
///
/// Zero values are unrepresentable (`Quantity` rejects them during
/// deserialization), so a constructed policy only needs its bounds checked.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionPolicy {
    /// Value a row's stepper starts at
    #[serde(default = "default_start")]
    default_quantity: Quantity,

    /// Ceiling the stepper plus button clamps to
    #[serde(default = "default_max")]
    max_quantity: Quantity,
}

fn default_start() -> Quantity {
    Quantity::ONE
}

fn default_max() -> Quantity {
    Quantity::DEFAULT_STEPPER_MAX
}

impl SessionPolicy {
    pub fn new(default_quantity: Quantity, max_quantity: Quantity) -> Result<Self, PolicyError> {
        if max_quantity < default_quantity {
            return Err(PolicyError::MaxBelowDefault {
                max: max_quantity,
                default: default_quantity,
            });
        }

        Ok(Self {
            default_quantity,
            max_quantity,
        })
    }

    /// Read overrides from PANTRY-prefixed environment variables
    /// (e.g. PANTRY_MAX_QUANTITY=15 raises the stepper ceiling)
    pub fn load() -> Result<Self, PolicyError> {
        // Without an explicit prefix separator, setting the nesting separator
        // would make config-rs expect PANTRY__MAX_QUANTITY.
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("PANTRY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let policy: SessionPolicy = settings.try_deserialize()?;

        // Re-run the bounds check; field defaults alone cannot guarantee it
        Self::new(policy.default_quantity, policy.max_quantity)
    }

    pub fn default_quantity(&self) -> Quantity {
        self.default_quantity
    }

    pub fn max_quantity(&self) -> Quantity {
        self.max_quantity
    }
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            default_quantity: default_start(),
            max_quantity: default_max(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("Policy load failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("max_quantity {max} is below default_quantity {default}")]
    MaxBelowDefault { max: Quantity, default: Quantity },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_bounds() {
        let policy = SessionPolicy::default();

        assert_eq!(policy.default_quantity().get(), 1);
        assert_eq!(policy.max_quantity().get(), 10);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let five = Quantity::new(5).unwrap();
        let two = Quantity::new(2).unwrap();

        let result = SessionPolicy::new(five, two);

        assert!(matches!(
            result,
            Err(PolicyError::MaxBelowDefault { .. })
        ));
    }

    #[test]
    fn test_load_from_environment() {
        // All environment handling lives in this one test so parallel test
        // threads never observe each other's variables.
        let policy = SessionPolicy::load().unwrap();
        assert_eq!(policy.max_quantity().get(), 10);

        std::env::set_var("PANTRY_MAX_QUANTITY", "15");
        let policy = SessionPolicy::load().unwrap();
        assert_eq!(policy.max_quantity().get(), 15);
        assert_eq!(policy.default_quantity().get(), 1);

        std::env::set_var("PANTRY_MAX_QUANTITY", "0");
        assert!(SessionPolicy::load().is_err());

        std::env::set_var("PANTRY_MAX_QUANTITY", "2");
        std::env::set_var("PANTRY_DEFAULT_QUANTITY", "5");
        assert!(matches!(
            SessionPolicy::load(),
            Err(PolicyError::MaxBelowDefault { .. })
        ));

        std::env::remove_var("PANTRY_MAX_QUANTITY");
        std::env::remove_var("PANTRY_DEFAULT_QUANTITY");
    }
}
