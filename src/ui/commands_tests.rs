#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use spendtui::config::Settings;
use spendtui::report::FixedClock;
use spendtui::{Budget, TransactionForm, TransactionId, TransactionStore};

use super::app::{App, InputMode, PendingAction, Screen};
use super::commands::*;

fn test_app() -> App {
    let store = TransactionStore::with_sample_data(Budget::default());
    let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
    App::new(store, Settings::default(), Box::new(clock))
}

// ── levenshtein ───────────────────────────────────────────────

#[test]
fn test_levenshtein_identical() {
    assert_eq!(levenshtein("budget", "budget"), 0);
}

#[test]
fn test_levenshtein_one_edit() {
    assert_eq!(levenshtein("budgte", "budget"), 2);
    assert_eq!(levenshtein("serch", "search"), 1);
}

#[test]
fn test_levenshtein_empty() {
    assert_eq!(levenshtein("", "add"), 3);
    assert_eq!(levenshtein("add", ""), 3);
}

// ── parse_transaction_args ────────────────────────────────────

#[test]
fn test_parse_single_word_category() {
    let form = parse_transaction_args("expense 12.50 2025-08-15 Food Lunch with team").unwrap();
    assert_eq!(form.kind, "expense");
    assert_eq!(form.amount, "12.50");
    assert_eq!(form.date, "2025-08-15");
    assert_eq!(form.category, "Food");
    assert_eq!(form.description, "Lunch with team");
}

#[test]
fn test_parse_multi_word_category() {
    let form = parse_transaction_args("income 300 2025-08-02 other income Garage sale").unwrap();
    assert_eq!(form.category, "Other Income");
    assert_eq!(form.description, "Garage sale");
}

#[test]
fn test_parse_category_must_end_at_word_boundary() {
    // "Foodstuff" is not the "Food" category
    let form = parse_transaction_args("expense 5 2025-08-15 Foodstuff snacks").unwrap();
    assert_eq!(form.category, "Foodstuff");
    assert_eq!(form.description, "snacks");
}

#[test]
fn test_parse_category_without_description() {
    let form = parse_transaction_args("expense 5 2025-08-15 Bills").unwrap();
    assert_eq!(form.category, "Bills");
    assert_eq!(form.description, "");
}

#[test]
fn test_parse_missing_fields() {
    assert!(parse_transaction_args("").is_err());
    assert!(parse_transaction_args("expense 5").is_err());
    assert!(parse_transaction_args("expense 5 2025-08-15").is_err());
}

#[test]
fn test_edit_command_roundtrip() {
    let form = TransactionForm::new("expense", "85", "2025-08-10", "Other Expenses", "Gas Bill");
    let line = edit_command_for(&form);
    assert_eq!(line, "edit expense 85 2025-08-10 Other Expenses Gas Bill");
    let parsed = parse_transaction_args(line.strip_prefix("edit ").unwrap()).unwrap();
    assert_eq!(parsed, form);
}

// ── handle_command ────────────────────────────────────────────

#[test]
fn test_unknown_command_suggests_closest() {
    let mut app = test_app();
    handle_command("budgte 10", &mut app).unwrap();
    assert!(app.status_is_error);
    assert!(app.status_message.contains(":budget"));
}

#[test]
fn test_add_command_saves_and_refreshes() {
    let mut app = test_app();
    handle_command("add expense 30 2025-08-18 Food Dinner", &mut app).unwrap();
    assert!(!app.status_is_error);
    assert_eq!(app.status_message, "Transaction saved successfully!");
    assert_eq!(app.store.len(), 4);
    assert_eq!(app.overview.monthly.expenses, dec!(235));
}

#[test]
fn test_add_command_reports_validation_error() {
    let mut app = test_app();
    handle_command("add expense 30 2025-08-18 Salary Dinner", &mut app).unwrap();
    assert!(app.status_is_error);
    assert_eq!(app.status_message, "'Salary' is not a valid expense category");
    assert_eq!(app.store.len(), 3);
}

#[test]
fn test_edit_command_targets_editing_id() {
    let mut app = test_app();
    app.editing_id = Some(TransactionId(2));
    handle_command("edit expense 140 2025-08-15 Food Groceries", &mut app).unwrap();
    assert!(!app.status_is_error);
    assert_eq!(app.store.get(TransactionId(2)).unwrap().amount, dec!(140));
    assert_eq!(app.editing_id, None);
}

#[test]
fn test_edit_command_needs_a_visible_selection() {
    let mut app = test_app();
    assert_eq!(app.screen, Screen::Dashboard);
    handle_command("edit income 1 2025-08-01 Salary Oops", &mut app).unwrap();

    assert!(app.status_is_error);
    let groceries = app.store.get(TransactionId(2)).unwrap();
    assert_eq!(groceries.description, "Groceries");
    assert_eq!(groceries.amount, dec!(120));
}

#[test]
fn test_edit_command_uses_highlighted_row() {
    let mut app = test_app();
    handle_command("t", &mut app).unwrap();
    handle_command("edit expense 99 2025-08-15 Food Groceries", &mut app).unwrap();

    assert!(!app.status_is_error);
    assert_eq!(app.store.get(TransactionId(2)).unwrap().amount, dec!(99));
}

#[test]
fn test_added_row_is_scrolled_into_view() {
    let mut app = test_app();
    handle_command("t", &mut app).unwrap();
    app.visible_rows = 2;
    handle_command("add expense 5 2025-07-01 Food Old receipt", &mut app).unwrap();

    let page = app.transaction_page();
    assert_eq!(app.transaction_index, 3);
    assert!(app.transaction_scroll <= app.transaction_index);
    assert!(app.transaction_index < app.transaction_scroll + page);
}

#[test]
fn test_budget_command() {
    let mut app = test_app();
    handle_command("budget 1,000", &mut app).unwrap();
    assert!(app.status_message.starts_with("Budget updated successfully!"));
    assert_eq!(app.store.budget().amount(), dec!(1000));
    assert_eq!(app.overview.budget_usage.percentage, dec!(20.5));
}

#[test]
fn test_budget_command_rejects_zero() {
    let mut app = test_app();
    handle_command("budget 0", &mut app).unwrap();
    assert!(app.status_is_error);
    assert_eq!(app.store.budget().amount(), dec!(2000));
}

#[test]
fn test_category_command_filters_and_clears() {
    let mut app = test_app();
    handle_command("category bills", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Transactions);
    assert_eq!(app.filter.category, "Bills");
    assert_eq!(app.transactions.len(), 1);

    handle_command("category", &mut app).unwrap();
    assert_eq!(app.filter.category, "");
    assert_eq!(app.transactions.len(), 3);
}

#[test]
fn test_search_command_applies_immediately() {
    let mut app = test_app();
    handle_command("search gro", &mut app).unwrap();
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.transactions[0].description, "Groceries");
    assert!(!app.search_debounce.is_pending());
}

#[test]
fn test_delete_command_asks_for_confirmation() {
    let mut app = test_app();
    handle_command("transactions", &mut app).unwrap();
    handle_command("delete", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert!(matches!(
        app.pending_action,
        Some(PendingAction::DeleteTransaction { .. })
    ));
    assert_eq!(app.store.len(), 3);
}

#[test]
fn test_delete_command_requires_transactions_screen() {
    let mut app = test_app();
    handle_command("delete", &mut app).unwrap();
    assert!(app.status_is_error);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_export_command_writes_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let mut app = test_app();
    handle_command(&format!("export {}", path.display()), &mut app).unwrap();
    assert!(!app.status_is_error, "{}", app.status_message);
    assert!(app.status_message.starts_with("Exported 3 transactions"));
    assert!(path.exists());
}

#[test]
fn test_confirmed_delete_removes_transaction() {
    let mut app = test_app();
    handle_command("t", &mut app).unwrap();
    let target = app.selected_transaction().unwrap().id;
    handle_command("delete", &mut app).unwrap();
    app.confirm_pending();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "Transaction deleted successfully!");
    assert!(app.store.get(target).is_none());
    assert_eq!(app.transactions.len(), 2);
}

#[test]
fn test_cancelled_delete_keeps_transaction() {
    let mut app = test_app();
    handle_command("t", &mut app).unwrap();
    handle_command("delete", &mut app).unwrap();
    app.cancel_pending();

    assert!(app.pending_action.is_none());
    assert_eq!(app.store.len(), 3);
    assert_eq!(app.status_message, "Cancelled");
}
