mod budget;
mod category;
mod form;
mod transaction;

pub use budget::Budget;
pub use category::{categories_for, CategoryCatalog};
pub use form::{parse_amount, parse_date, TransactionForm, DATE_FORMAT, MAX_AMOUNT};
pub(crate) use form::ValidTransaction;
pub use transaction::{Transaction, TransactionId, TransactionType};

#[cfg(test)]
mod tests;
