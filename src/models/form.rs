use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{CategoryCatalog, Transaction, TransactionType};
use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted transaction amount or budget: one trillion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Raw field values as submitted by the front-end, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub date: String,
}

/// Field values that passed validation; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidTransaction {
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) kind: TransactionType,
    pub(crate) category: String,
    pub(crate) date: NaiveDate,
}

impl TransactionForm {
    pub fn new(
        kind: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind: kind.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Checks fields in form order and reports the first problem found.
    pub(crate) fn validate(&self) -> Result<ValidTransaction, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount = parse_amount(&self.amount)?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(amount));
        }

        let kind = TransactionType::parse(&self.kind)
            .ok_or_else(|| ValidationError::UnknownType(self.kind.trim().to_string()))?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        let category =
            CategoryCatalog::find(kind, category).ok_or_else(|| ValidationError::UnknownCategory {
                kind,
                category: category.to_string(),
            })?;

        let date = parse_date(&self.date)?;

        Ok(ValidTransaction {
            description: description.to_string(),
            amount,
            kind,
            category: category.to_string(),
            date,
        })
    }
}

impl From<&Transaction> for TransactionForm {
    fn from(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: txn.amount.to_string(),
            kind: txn.kind.as_str().to_string(),
            category: txn.category.clone(),
            date: txn.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Parse a decimal amount, accepting an optional leading `$` and thousands separators.
pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    Decimal::from_str(&cleaned).map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(s.trim().to_string()))
}
