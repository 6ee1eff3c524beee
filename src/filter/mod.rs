use crate::models::Transaction;

/// Search text and category filter of the transactions view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub search: String,
    /// Exact category name; empty matches every category.
    pub category: String,
}

impl TransactionFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.category.is_empty()
    }

    pub fn apply(&self, txns: &[Transaction]) -> Vec<Transaction> {
        filter_and_sort(txns, &self.search, &self.category)
    }
}

/// Case-insensitive substring match on description or category, ANDed with an
/// exact category match. Newest first; same-day entries keep their order.
pub fn filter_and_sort(
    txns: &[Transaction],
    search_text: &str,
    category_filter: &str,
) -> Vec<Transaction> {
    let term = search_text.trim().to_lowercase();

    let mut matched: Vec<Transaction> = txns
        .iter()
        .filter(|t| {
            let matches_search = term.is_empty()
                || t.description.to_lowercase().contains(&term)
                || t.category.to_lowercase().contains(&term);
            let matches_category = category_filter.is_empty() || t.category == category_filter;
            matches_search && matches_category
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}
