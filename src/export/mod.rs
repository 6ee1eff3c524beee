use anyhow::{Context, Result};
use chrono::NaiveDate;

use spendtui::Transaction;

pub(crate) const HEADER: [&str; 6] = ["id", "date", "type", "category", "description", "amount"];

/// Write `txns` as CSV with a signed amount column. Returns the row count.
pub(crate) fn write_csv(path: &str, txns: &[Transaction]) -> Result<usize> {
    if txns.is_empty() {
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {path}"))?;
    writer.write_record(HEADER)?;

    for txn in txns {
        writer.write_record([
            txn.id.to_string(),
            txn.date.format(spendtui::models::DATE_FORMAT).to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.description.clone(),
            format!("{:.2}", txn.signed_amount()),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write export file: {path}"))?;
    tracing::debug!(path, rows = txns.len(), "exported transactions");
    Ok(txns.len())
}

/// `~/spendtui-export-YYYY-MM-DD.csv`, or the working directory when no home
/// directory is known.
pub(crate) fn default_export_path(today: NaiveDate) -> String {
    let file = format!("spendtui-export-{}.csv", today.format("%Y-%m-%d"));
    match directories::UserDirs::new() {
        Some(dirs) => dirs.home_dir().join(file).display().to_string(),
        None => file,
    }
}
