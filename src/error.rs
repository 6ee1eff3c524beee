use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{TransactionId, TransactionType};

/// Errors returned by store mutators. None of them leave the store modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Transaction {0} not found")]
    NotFound(TransactionId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description is required")]
    EmptyDescription,

    #[error("Amount is not a number: '{0}'")]
    InvalidAmount(String),

    #[error("Amount must be greater than 0 (got {0})")]
    NonPositiveAmount(Decimal),

    #[error("Amount must be at most {max} (got {0})", max = crate::models::MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    #[error("Type must be 'income' or 'expense' (got '{0}')")]
    UnknownType(String),

    #[error("Category is required")]
    EmptyCategory,

    #[error("'{category}' is not a valid {kind} category")]
    UnknownCategory {
        kind: TransactionType,
        category: String,
    },

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Budget must be greater than 0 (got {0})")]
    NonPositiveBudget(Decimal),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
