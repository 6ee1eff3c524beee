use anyhow::{Context, Result};

use spendtui::config::Settings;
use spendtui::filter::TransactionFilter;
use spendtui::models::CategoryCatalog;
use spendtui::report::{compute_overview, Clock};
use spendtui::{Transaction, TransactionStore, TransactionType};

/// `args` holds the command and its arguments, global flags already removed.
pub(crate) fn as_cli(
    args: &[String],
    store: &TransactionStore,
    settings: &Settings,
    clock: &dyn Clock,
) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "summary" | "s" => cli_summary(&args[1..], store, settings, clock),
        "list" | "ls" => cli_list(&args[1..], store),
        "categories" => cli_categories(&args[1..]),
        "export" => cli_export(&args[1..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTUI - in-memory personal finance tracker");
    println!();
    println!("Usage: spendtui [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print balance, monthly report and budget usage");
    println!("  list                          List transactions, newest first");
    println!("    --search <text>             Match description or category");
    println!("    --category <name>           Only this category");
    println!("  categories [income|expense]   List the allowed categories");
    println!("  export <path>                 Export transactions to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --budget <amount>             Monthly budget (default: 2000)");
    println!("  --as-of <YYYY-MM-DD>          Reference date for monthly figures");
    println!("  --top <n>                     Categories in the breakdown (default: 5)");
    println!("  --debounce-ms <n>             Search debounce in the TUI (default: 300)");
    println!("  --empty                       Start without the sample transactions");
    println!();
    println!("Set SPENDTUI_LOG (e.g. debug) to control log output on stderr.");
}

fn cli_summary(
    args: &[String],
    store: &TransactionStore,
    settings: &Settings,
    clock: &dyn Clock,
) -> Result<()> {
    if let Some(extra) = args.first() {
        anyhow::bail!("Unexpected argument for summary: {extra}");
    }

    let overview = compute_overview(
        store.get_all(),
        store.budget(),
        clock.today(),
        settings.breakdown_limit,
    );
    let balance = &overview.balance;
    let monthly = &overview.monthly;
    let usage = &overview.budget_usage;

    println!("SpendTUI - {}", monthly.label());
    println!("{}", "─".repeat(40));
    println!("  Balance:    ${:.2}", balance.balance);
    println!("  Income:     ${:.2}", balance.total_income);
    println!("  Expenses:   ${:.2}", balance.total_expenses);
    println!("  Total Txns: {}", store.len());
    println!();
    println!("This month:");
    println!("  Income:     ${:.2}", monthly.income);
    println!("  Expenses:   ${:.2}", monthly.expenses);
    println!("  Net:        ${:.2}", monthly.net);

    if !overview.breakdown.is_empty() {
        println!();
        println!("Top Expense Categories:");
        for entry in &overview.breakdown {
            println!("  {:<24} ${:.2}", entry.category, entry.amount);
        }
    }

    println!();
    println!(
        "Budget: ${:.2} of ${:.2} ({:.2}%){}",
        usage.spent,
        usage.budget,
        usage.percentage,
        if usage.is_over_budget() {
            " OVER BUDGET"
        } else {
            ""
        }
    );

    Ok(())
}

fn cli_list(args: &[String], store: &TransactionStore) -> Result<()> {
    let filter = parse_filter(args)?;
    let txns = filter.apply(store.get_all());
    if txns.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    print_table(&txns);
    Ok(())
}

fn parse_filter(args: &[String]) -> Result<TransactionFilter> {
    let mut filter = TransactionFilter::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--search" => {
                filter.search = iter.next().context("Missing value for --search")?.clone();
            }
            "--category" => {
                let name = iter.next().context("Missing value for --category")?;
                let category = CategoryCatalog::find_any(name)
                    .with_context(|| format!("Category '{name}' not found"))?;
                filter.category = category.to_string();
            }
            other => anyhow::bail!("Unexpected argument for list: {other}"),
        }
    }
    Ok(filter)
}

fn print_table(txns: &[Transaction]) {
    println!(
        "{:<4} {:<10} {:<7} {:<16} {:<24} {:>12}",
        "ID", "Date", "Type", "Category", "Description", "Amount"
    );
    println!("{}", "─".repeat(78));
    for txn in txns {
        println!(
            "{:<4} {:<10} {:<7} {:<16} {:<24} {:>12}",
            txn.id.get(),
            txn.date.to_string(),
            txn.kind.as_str(),
            txn.category,
            txn.description,
            format!("{:.2}", txn.signed_amount()),
        );
    }
}

fn cli_categories(args: &[String]) -> Result<()> {
    let kinds: Vec<TransactionType> = match args.first() {
        None => TransactionType::all().to_vec(),
        Some(arg) => vec![TransactionType::parse(arg)
            .with_context(|| format!("Unknown transaction type: {arg}"))?],
    };

    for kind in kinds {
        println!("{kind}:");
        for name in CategoryCatalog::categories_for(kind) {
            println!("  {name}");
        }
    }
    Ok(())
}

fn cli_export(args: &[String], store: &TransactionStore) -> Result<()> {
    let Some(path) = args.first().filter(|a| !a.starts_with('-')) else {
        anyhow::bail!("Usage: spendtui export <path> [--search <text>] [--category <name>]");
    };
    let path = shellexpand(path);
    let filter = parse_filter(&args[1..])?;
    let txns = filter.apply(store.get_all());

    let count = crate::export::write_csv(&path, &txns)?;
    if count == 0 {
        println!("No transactions to export");
    } else {
        println!("Exported {count} transactions to {path}");
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        match directories::UserDirs::new() {
            Some(dirs) => dirs.home_dir().join(rest).display().to_string(),
            None => path.to_string(),
        }
    } else {
        path.to_string()
    }
}
