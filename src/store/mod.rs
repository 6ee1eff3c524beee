use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{Budget, Transaction, TransactionForm, TransactionId};

/// Owns the session's transactions and the monthly budget.
///
/// Every mutator validates before touching state, so a failed call leaves the
/// store exactly as it was.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    budget: Budget,
}

impl TransactionStore {
    pub fn new(budget: Budget) -> Self {
        Self {
            transactions: Vec::new(),
            budget,
        }
    }

    /// Store preloaded with the sample transactions.
    pub fn with_sample_data(budget: Budget) -> Self {
        Self {
            transactions: crate::seed::sample_transactions(),
            budget,
        }
    }

    /// Next id: one more than the largest in use, or 1 when empty.
    pub fn next_id(&self) -> TransactionId {
        let max = self.transactions.iter().map(|t| t.id.0).max().unwrap_or(0);
        TransactionId(max + 1)
    }

    pub fn add_transaction(&mut self, form: &TransactionForm) -> Result<&Transaction> {
        let valid = form.validate().map_err(|e| {
            tracing::warn!(error = %e, "rejected new transaction");
            Error::from(e)
        })?;

        let txn = Transaction {
            id: self.next_id(),
            description: valid.description,
            amount: valid.amount,
            kind: valid.kind,
            category: valid.category,
            date: valid.date,
        };
        tracing::debug!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");

        let index = self.transactions.len();
        self.transactions.push(txn);
        Ok(&self.transactions[index])
    }

    pub fn update_transaction(
        &mut self,
        id: TransactionId,
        form: &TransactionForm,
    ) -> Result<&Transaction> {
        let index = self.position(id).ok_or(Error::NotFound(id))?;
        let valid = form.validate().map_err(|e| {
            tracing::warn!(id = %id, error = %e, "rejected transaction update");
            Error::from(e)
        })?;

        let txn = &mut self.transactions[index];
        txn.description = valid.description;
        txn.amount = valid.amount;
        txn.kind = valid.kind;
        txn.category = valid.category;
        txn.date = valid.date;
        tracing::debug!(id = %id, kind = %txn.kind, amount = %txn.amount, "updated transaction");
        Ok(txn)
    }

    /// Removes and returns the transaction.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<Transaction> {
        let index = self.position(id).ok_or_else(|| {
            tracing::warn!(id = %id, "delete of unknown transaction");
            Error::NotFound(id)
        })?;
        let removed = self.transactions.remove(index);
        tracing::debug!(id = %id, "deleted transaction");
        Ok(removed)
    }

    pub fn set_budget(&mut self, amount: Decimal) -> Result<Budget> {
        let budget = Budget::new(amount).map_err(|e| {
            tracing::warn!(error = %e, "rejected budget");
            Error::from(e)
        })?;
        self.budget = budget;
        tracing::debug!(budget = %budget, "updated budget");
        Ok(budget)
    }

    pub fn get_all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }
}
