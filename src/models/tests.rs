#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::ValidationError;

fn make_txn(kind: TransactionType) -> Transaction {
    Transaction {
        id: TransactionId(1),
        description: "Test".into(),
        amount: dec!(42.50),
        kind,
        category: "Food".into(),
        date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
    }
}

fn valid_form() -> TransactionForm {
    TransactionForm::new("expense", "120", "2025-08-15", "Food", "Groceries")
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_income() {
    let txn = make_txn(TransactionType::Income);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(42.50));
}

#[test]
fn test_expense() {
    let txn = make_txn(TransactionType::Expense);
    assert!(txn.is_expense());
    assert!(!txn.is_income());
    assert_eq!(txn.signed_amount(), dec!(-42.50));
    // The stored amount never goes negative
    assert_eq!(txn.amount, dec!(42.50));
}

#[test]
fn test_transaction_id_display() {
    assert_eq!(TransactionId(7).to_string(), "7");
    assert_eq!(TransactionId(7).get(), 7);
}

// ── TransactionType ───────────────────────────────────────────

#[test]
fn test_transaction_type_parse() {
    assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
    assert_eq!(TransactionType::parse("INCOME"), Some(TransactionType::Income));
    assert_eq!(TransactionType::parse(" expense "), Some(TransactionType::Expense));
    assert_eq!(TransactionType::parse("transfer"), None);
    assert_eq!(TransactionType::parse(""), None);
}

#[test]
fn test_transaction_type_roundtrip() {
    for t in TransactionType::all() {
        assert_eq!(TransactionType::parse(t.as_str()), Some(*t));
    }
}

#[test]
fn test_transaction_type_sign() {
    assert_eq!(TransactionType::Income.sign(), "+");
    assert_eq!(TransactionType::Expense.sign(), "-");
    assert_eq!(format!("{}", TransactionType::Expense), "expense");
}

// ── CategoryCatalog ───────────────────────────────────────────

#[test]
fn test_categories_for_income() {
    assert_eq!(
        categories_for(TransactionType::Income),
        &["Salary", "Freelance", "Investment", "Business", "Other Income"]
    );
}

#[test]
fn test_categories_for_expense_order() {
    let cats = categories_for(TransactionType::Expense);
    assert_eq!(cats.len(), 9);
    assert_eq!(cats[0], "Food");
    assert_eq!(cats[8], "Other Expenses");
}

#[test]
fn test_all_categories_income_first() {
    let all = CategoryCatalog::all_categories();
    assert_eq!(all.len(), 14);
    assert_eq!(all[0], "Salary");
    assert_eq!(all[5], "Food");
}

#[test]
fn test_catalog_find_case_insensitive() {
    assert_eq!(
        CategoryCatalog::find(TransactionType::Expense, "other expenses"),
        Some("Other Expenses")
    );
    assert_eq!(CategoryCatalog::find(TransactionType::Income, "Food"), None);
    assert_eq!(CategoryCatalog::find_any("bills"), Some("Bills"));
    assert_eq!(CategoryCatalog::find_any("Crypto"), None);
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_new() {
    let budget = Budget::new(dec!(2000)).unwrap();
    assert_eq!(budget.amount(), dec!(2000));
    assert_eq!(budget.to_string(), "2000");
}

#[test]
fn test_budget_default() {
    assert_eq!(Budget::default().amount(), dec!(2000));
}

#[test]
fn test_budget_rejects_zero_and_negative() {
    assert_eq!(
        Budget::new(dec!(0)),
        Err(ValidationError::NonPositiveBudget(dec!(0)))
    );
    assert!(Budget::new(dec!(-10)).is_err());
}

#[test]
fn test_budget_rejects_above_ceiling() {
    assert_eq!(Budget::new(MAX_AMOUNT).unwrap().amount(), MAX_AMOUNT);
    assert_eq!(
        Budget::new(Decimal::MAX),
        Err(ValidationError::AmountTooLarge(Decimal::MAX))
    );
}

// ── TransactionForm ───────────────────────────────────────────

#[test]
fn test_form_validate_ok() {
    let valid = valid_form().validate().unwrap();
    assert_eq!(valid.description, "Groceries");
    assert_eq!(valid.amount, dec!(120));
    assert_eq!(valid.kind, TransactionType::Expense);
    assert_eq!(valid.category, "Food");
    assert_eq!(valid.date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
}

#[test]
fn test_form_trims_and_canonicalizes() {
    let form = TransactionForm::new(" Income ", " 5000.00 ", " 2025-08-01 ", "salary", "  Pay  ");
    let valid = form.validate().unwrap();
    assert_eq!(valid.description, "Pay");
    assert_eq!(valid.kind, TransactionType::Income);
    assert_eq!(valid.category, "Salary");
}

#[test]
fn test_form_empty_description() {
    let form = TransactionForm {
        description: "   ".into(),
        ..valid_form()
    };
    assert_eq!(form.validate(), Err(ValidationError::EmptyDescription));
}

#[test]
fn test_form_invalid_amount() {
    let form = TransactionForm {
        amount: "abc".into(),
        ..valid_form()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationError::InvalidAmount("abc".into()))
    );

    let form = TransactionForm {
        amount: String::new(),
        ..valid_form()
    };
    assert!(matches!(form.validate(), Err(ValidationError::InvalidAmount(_))));
}

#[test]
fn test_form_amount_ceiling() {
    let form = TransactionForm {
        amount: "1,000,000,000,000".into(),
        ..valid_form()
    };
    assert_eq!(form.validate().unwrap().amount, MAX_AMOUNT);

    let form = TransactionForm {
        amount: "1000000000000000000000000000".into(),
        ..valid_form()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationError::AmountTooLarge(dec!(1000000000000000000000000000)))
    );
}

#[test]
fn test_form_non_positive_amount() {
    let form = TransactionForm {
        amount: "0".into(),
        ..valid_form()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationError::NonPositiveAmount(dec!(0)))
    );

    let form = TransactionForm {
        amount: "-12.5".into(),
        ..valid_form()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationError::NonPositiveAmount(dec!(-12.5)))
    );
}

#[test]
fn test_form_unknown_type() {
    let form = TransactionForm {
        kind: "transfer".into(),
        ..valid_form()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationError::UnknownType("transfer".into()))
    );
}

#[test]
fn test_form_empty_category() {
    let form = TransactionForm {
        category: String::new(),
        ..valid_form()
    };
    assert_eq!(form.validate(), Err(ValidationError::EmptyCategory));
}

#[test]
fn test_form_category_must_match_type() {
    let form = TransactionForm {
        category: "Salary".into(),
        ..valid_form()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationError::UnknownCategory {
            kind: TransactionType::Expense,
            category: "Salary".into(),
        })
    );
}

#[test]
fn test_form_invalid_date() {
    for bad in ["", "2025-13-01", "2025-02-30", "08/15/2025", "yesterday"] {
        let form = TransactionForm {
            date: bad.into(),
            ..valid_form()
        };
        assert!(
            matches!(form.validate(), Err(ValidationError::InvalidDate(_))),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn test_form_from_transaction() {
    let txn = make_txn(TransactionType::Expense);
    let form = TransactionForm::from(&txn);
    assert_eq!(form.kind, "expense");
    assert_eq!(form.amount, "42.50");
    assert_eq!(form.date, "2025-08-15");
    assert_eq!(form.category, "Food");
    assert_eq!(form.description, "Test");
    assert!(form.validate().is_ok());
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_accepts_currency_formatting() {
    assert_eq!(parse_amount("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_amount("  85 ").unwrap(), dec!(85));
    assert_eq!(parse_amount("0.01").unwrap(), dec!(0.01));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert!(parse_amount("12abc").is_err());
    assert!(parse_amount("$").is_err());
}
