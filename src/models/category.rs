use super::TransactionType;

const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investment", "Business", "Other Income"];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Entertainment",
    "Bills",
    "Shopping",
    "Healthcare",
    "Education",
    "Rent",
    "Other Expenses",
];

/// Fixed mapping from transaction type to its allowed category names.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryCatalog;

impl CategoryCatalog {
    pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
        match kind {
            TransactionType::Income => INCOME_CATEGORIES,
            TransactionType::Expense => EXPENSE_CATEGORIES,
        }
    }

    /// Income categories followed by expense categories; the options of the
    /// category filter.
    pub fn all_categories() -> Vec<&'static str> {
        INCOME_CATEGORIES
            .iter()
            .chain(EXPENSE_CATEGORIES)
            .copied()
            .collect()
    }

    /// Find a category by name (case-insensitive), returning its canonical spelling.
    pub fn find(kind: TransactionType, name: &str) -> Option<&'static str> {
        let lower = name.trim().to_lowercase();
        Self::categories_for(kind)
            .iter()
            .find(|c| c.to_lowercase() == lower)
            .copied()
    }

    /// Find a category in either list (case-insensitive).
    pub fn find_any(name: &str) -> Option<&'static str> {
        TransactionType::all()
            .iter()
            .find_map(|kind| Self::find(*kind, name))
    }
}

pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
    CategoryCatalog::categories_for(kind)
}
