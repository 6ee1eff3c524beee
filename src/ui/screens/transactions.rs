use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = view_title(app);

    if app.transactions.is_empty() {
        let msg = if app.filter.is_active() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No transactions match the current filter",
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Use :search and :category with no argument to clear it",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No transactions yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Add one with :add <type> <amount> <date> <category> <description>",
                    theme::dim_style(),
                )),
            ]
        };
        f.render_widget(
            Paragraph::new(msg).centered().block(theme::panel(title)),
            area,
        );
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::table_header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let amount_str = format!("{}{}", txn.kind.sign(), format_amount(txn.amount));

            Row::new(vec![
                Cell::from(format!("  {}", txn.date)),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(txn.category.as_str()),
                Cell::from(Span::styled(
                    amount_str,
                    Style::default().fg(theme::kind_color(txn.kind)),
                )),
            ])
            .style(theme::row_style(i, app.transaction_index))
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel(title));

    f.render_widget(table, area);
}

fn view_title(app: &App) -> String {
    let mut title = format!("Transactions ({})", app.transactions.len());
    if !app.filter.search.trim().is_empty() {
        title.push_str(&format!(" search: '{}'", app.filter.search.trim()));
    }
    if !app.filter.category.is_empty() {
        title.push_str(&format!(" category: {}", app.filter.category));
    }
    title
}
