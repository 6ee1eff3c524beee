//! Sample data loaded at startup.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionId, TransactionType};

pub const DEFAULT_MONTHLY_BUDGET: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

pub fn sample_transactions() -> Vec<Transaction> {
    [
        (1, "Salary", 5000, TransactionType::Income, "Salary", (2025, 8, 1)),
        (2, "Groceries", 120, TransactionType::Expense, "Food", (2025, 8, 15)),
        (3, "Gas Bill", 85, TransactionType::Expense, "Bills", (2025, 8, 10)),
    ]
    .into_iter()
    .filter_map(|(id, description, amount, kind, category, (y, m, d))| {
        Some(Transaction {
            id: TransactionId(id),
            description: description.to_string(),
            amount: Decimal::from(amount),
            kind,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
        })
    })
    .collect()
}
