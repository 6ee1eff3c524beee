use rust_decimal::Decimal;

use super::MAX_AMOUNT;
use crate::error::ValidationError;

/// Spending ceiling for the current calendar month. Always positive, so
/// usage percentages never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Budget(Decimal);

impl Budget {
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveBudget(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(crate::seed::DEFAULT_MONTHLY_BUDGET)
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
