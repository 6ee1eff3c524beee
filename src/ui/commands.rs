use std::collections::HashMap;
use std::sync::LazyLock;

use spendtui::models::{parse_amount, CategoryCatalog, TransactionType};
use spendtui::TransactionForm;

use super::app::{App, InputMode, PendingAction, Screen};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add expense 12.50 2025-08-15 Food Lunch)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add transaction (e.g. :a income 5000 2025-08-01 Salary Pay)",
        cmd_add,
        r
    );
    register_command!(
        "edit",
        "Replace selected transaction (same fields as :add)",
        cmd_edit,
        r
    );
    register_command!("delete", "Delete selected transaction", cmd_delete, r);
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget 2000)",
        cmd_budget,
        r
    );
    register_command!(
        "category",
        "Filter by category, empty clears (e.g. :category Food)",
        cmd_category,
        r
    );
    register_command!(
        "c",
        "Filter by category (e.g. :c Bills)",
        cmd_category,
        r
    );
    register_command!(
        "search",
        "Search transactions (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s coffee)", cmd_search, r);
    register_command!(
        "export",
        "Export shown transactions to CSV (e.g. :export ~/spend.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_error(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

const TXN_USAGE: &str = "Usage: <income|expense> <amount> <YYYY-MM-DD> <category> <description>";

/// Split `:add`/`:edit` arguments into form fields.
///
/// Categories may contain spaces, so the longest catalog name the remainder
/// starts with is taken as the category; otherwise its first word is.
pub(crate) fn parse_transaction_args(args: &str) -> Result<TransactionForm, &'static str> {
    let mut parts = args.split_whitespace();
    let (Some(kind), Some(amount), Some(date)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TXN_USAGE);
    };
    let rest = parts.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        return Err(TXN_USAGE);
    }

    let candidates: Vec<&str> = match TransactionType::parse(kind) {
        Some(t) => CategoryCatalog::categories_for(t).to_vec(),
        None => CategoryCatalog::all_categories(),
    };
    let matched = candidates
        .iter()
        .filter(|cat| starts_with_word_ignore_case(&rest, cat))
        .max_by_key(|cat| cat.len());

    let (category, description) = match matched {
        Some(cat) => (cat.to_string(), rest[cat.len()..].trim().to_string()),
        None => {
            let mut split = rest.splitn(2, ' ');
            let first = split.next().unwrap_or("").to_string();
            (first, split.next().unwrap_or("").trim().to_string())
        }
    };

    Ok(TransactionForm::new(kind, amount, date, category, description))
}

fn starts_with_word_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        && text[prefix.len()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace)
}

/// The `:edit` line that reproduces a transaction, used to pre-fill the prompt.
pub(crate) fn edit_command_for(form: &TransactionForm) -> String {
    format!(
        "edit {} {} {} {} {}",
        form.kind, form.amount, form.date, form.category, form.description
    )
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard();
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh_transactions();
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    match parse_transaction_args(args) {
        Ok(form) => app.submit_transaction(None, &form),
        Err(usage) => app.set_error(format!(":add {usage}")),
    }
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App) -> anyhow::Result<()> {
    // Without `e`, only the row highlighted on the Transactions screen is a target
    let selected = match app.screen {
        Screen::Transactions => app.selected_transaction().map(|t| t.id),
        Screen::Dashboard => None,
    };
    let Some(id) = app.editing_id.or(selected) else {
        app.set_error("Select a transaction on the Transactions screen first");
        return Ok(());
    };

    match parse_transaction_args(args) {
        Ok(form) => app.submit_transaction(Some(id), &form),
        Err(usage) => app.set_error(format!(":edit {usage}")),
    }
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions || app.transactions.is_empty() {
        app.set_error("Navigate to Transactions and select one first");
        return Ok(());
    }

    let Some(id) = app.selected_transaction().map(|t| t.id) else {
        return Ok(());
    };
    // The view can lag behind the store; only confirm what still exists
    let Some(description) = app.store.get(id).map(|t| t.description.clone()) else {
        app.refresh_transactions();
        app.set_error(format!("Transaction {id} no longer exists"));
        return Ok(());
    };

    app.confirm_message = format!("Delete '{description}'?");
    app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Monthly budget: ${:.2}. Usage: :budget <amount>",
            app.store.budget().amount()
        ));
        return Ok(());
    }

    let result = parse_amount(args)
        .map_err(spendtui::Error::from)
        .and_then(|amount| app.store.set_budget(amount));
    match result {
        Ok(budget) => {
            app.refresh_dashboard();
            app.set_status(format!(
                "Budget updated successfully! (${:.2})",
                budget.amount()
            ));
        }
        Err(e) => app.set_error(e.to_string()),
    }
    Ok(())
}

fn cmd_category(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.filter.category.clear();
        app.screen = Screen::Transactions;
        app.refresh_transactions();
        app.set_status("Showing all categories");
        return Ok(());
    }

    match CategoryCatalog::find_any(args) {
        Some(category) => {
            app.filter.category = category.to_string();
            app.screen = Screen::Transactions;
            app.transaction_index = 0;
            app.transaction_scroll = 0;
            app.refresh_transactions();
            app.set_status(format!("Category: {category}"));
        }
        None => app.set_error(format!("Category '{args}' not found")),
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Transactions;
    app.apply_search();

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        crate::export::default_export_path(app.today())
    } else {
        crate::run::shellexpand(args)
    };

    match crate::export::write_csv(&path, &app.transactions) {
        Ok(0) => app.set_status("No transactions to export"),
        Ok(count) => app.set_status(format!("Exported {count} transactions to {path}")),
        Err(e) => app.set_error(format!("Export failed: {e:#}")),
    }
    Ok(())
}
