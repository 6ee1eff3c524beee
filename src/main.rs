mod export;
mod run;
mod ui;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use spendtui::config::Settings;
use spendtui::report::{Clock, FixedClock, SystemClock};
use spendtui::TransactionStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (settings, rest) =
        Settings::from_args(args.get(1..).unwrap_or_default()).context("Invalid option")?;

    let store = if settings.load_sample_data {
        TransactionStore::with_sample_data(settings.monthly_budget)
    } else {
        TransactionStore::new(settings.monthly_budget)
    };
    let clock: Box<dyn Clock> = match settings.as_of {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    if rest.is_empty() {
        let app = ui::app::App::new(store, settings, clock);
        run::as_tui(app)
    } else {
        init_logging();
        run::as_cli(&rest, &store, &settings, clock.as_ref())
    }
}

/// stderr only, so CLI output stays pipeable. Filter from `SPENDTUI_LOG`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SPENDTUI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
