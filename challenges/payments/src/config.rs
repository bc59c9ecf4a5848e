use crate::amount::Amount;

/// Bank transfers are capped at 10000 dollars.
pub const DEFAULT_MAX_AMOUNT: Amount = Amount::from_cents(1_000_000);

/// Policy applied by the file driver before anything reaches the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// A bank transfer above this is rejected; a due payment above it is skipped.
    pub max_amount: Amount,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}
