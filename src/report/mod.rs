//! Derived figures: balance, monthly report, category breakdown and budget
//! usage. Everything here is a pure function of its inputs.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Budget, Transaction};

/// Number of categories shown in the monthly breakdown.
pub const BREAKDOWN_LIMIT: usize = 5;

/// Source of the reference "today" for monthly figures.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

impl Balance {
    pub fn is_negative(&self) -> bool {
        self.balance < Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    /// The transactions dated within the month, in store order.
    pub transactions: Vec<Transaction>,
}

impl MonthlyReport {
    /// "YYYY-MM"
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetUsage {
    pub spent: Decimal,
    pub budget: Decimal,
    /// Unclamped; above 100 when over budget.
    pub percentage: Decimal,
    /// Negative when over budget.
    pub remaining: Decimal,
}

impl BudgetUsage {
    /// Percentage clamped to 100, for progress bars.
    pub fn fill_percentage(&self) -> Decimal {
        self.percentage.min(Decimal::ONE_HUNDRED)
    }

    pub fn is_over_budget(&self) -> bool {
        self.percentage > Decimal::ONE_HUNDRED
    }
}

/// Everything the dashboard shows, recomputed after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub balance: Balance,
    pub monthly: MonthlyReport,
    pub breakdown: Vec<CategoryTotal>,
    pub budget_usage: BudgetUsage,
}

pub fn compute_balance(txns: &[Transaction]) -> Balance {
    let (total_income, total_expenses) = sum_by_type(txns);
    Balance {
        total_income,
        total_expenses,
        balance: total_income.saturating_sub(total_expenses),
    }
}

pub fn is_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

pub fn compute_monthly_report(txns: &[Transaction], reference: NaiveDate) -> MonthlyReport {
    let transactions: Vec<Transaction> = txns
        .iter()
        .filter(|t| is_same_month(t.date, reference))
        .cloned()
        .collect();
    let (income, expenses) = sum_by_type(&transactions);
    MonthlyReport {
        year: reference.year(),
        month: reference.month(),
        income,
        expenses,
        net: income.saturating_sub(expenses),
        transactions,
    }
}

/// Top [`BREAKDOWN_LIMIT`] expense categories by total, largest first.
pub fn compute_category_breakdown(monthly_txns: &[Transaction]) -> Vec<CategoryTotal> {
    compute_category_breakdown_top(monthly_txns, BREAKDOWN_LIMIT)
}

/// Ties keep the order in which each category was first seen.
pub fn compute_category_breakdown_top(txns: &[Transaction], limit: usize) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in txns.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(total) => total.amount = total.amount.saturating_add(txn.amount),
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                amount: txn.amount,
            }),
        }
    }
    // sort_by is stable
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals.truncate(limit);
    totals
}

/// Saturates at `Decimal::MAX` instead of overflowing.
pub fn compute_budget_usage(monthly_expense_total: Decimal, budget: Budget) -> BudgetUsage {
    let limit = budget.amount();
    let percentage = monthly_expense_total
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(limit))
        .unwrap_or(Decimal::MAX);
    BudgetUsage {
        spent: monthly_expense_total,
        budget: limit,
        percentage,
        remaining: limit.saturating_sub(monthly_expense_total),
    }
}

pub fn compute_overview(
    txns: &[Transaction],
    budget: Budget,
    reference: NaiveDate,
    breakdown_limit: usize,
) -> Overview {
    let balance = compute_balance(txns);
    let monthly = compute_monthly_report(txns, reference);
    let breakdown = compute_category_breakdown_top(&monthly.transactions, breakdown_limit);
    let budget_usage = compute_budget_usage(monthly.expenses, budget);
    Overview {
        balance,
        monthly,
        breakdown,
        budget_usage,
    }
}

fn sum_by_type(txns: &[Transaction]) -> (Decimal, Decimal) {
    txns.iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(income, expenses), t| {
            if t.is_income() {
                (income.saturating_add(t.amount), expenses)
            } else {
                (income, expenses.saturating_add(t.amount))
            }
        })
}
