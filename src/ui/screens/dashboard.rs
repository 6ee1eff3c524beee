use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_long_date, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date header
            Constraint::Length(5), // Balance cards
            Constraint::Length(5), // Monthly report
            Constraint::Min(8),    // Top categories
            Constraint::Length(3), // Budget gauge
        ])
        .split(area);

    render_date_header(f, chunks[0], app);
    render_balance_cards(f, chunks[1], app);
    render_monthly_report(f, chunks[2], app);
    render_category_chart(f, chunks[3], app);
    render_budget_gauge(f, chunks[4], app);
}

fn render_date_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(Span::styled(
        format_long_date(app.today()),
        theme::dim_style(),
    )))
    .right_aligned();
    f.render_widget(header, area);
}

fn render_balance_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let balance = &app.overview.balance;
    render_card(
        f,
        cards[0],
        "Total Balance",
        balance.balance,
        theme::balance_color(balance.is_negative()),
    );
    render_card(f, cards[1], "Total Income", balance.total_income, theme::GREEN);
    render_card(
        f,
        cards[2],
        "Total Expenses",
        balance.total_expenses,
        theme::RED,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

fn render_monthly_report(f: &mut Frame, area: Rect, app: &App) {
    let monthly = &app.overview.monthly;

    let row = |label: &'static str, value: Decimal, color: Color| {
        Line::from(vec![
            Span::styled(format!("  {label:<10}"), theme::normal_style()),
            Span::styled(format_amount(value), Style::default().fg(color)),
        ])
    };

    let report = Paragraph::new(vec![
        row("Income", monthly.income, theme::GREEN),
        row("Expenses", monthly.expenses, theme::RED),
        row("Net", monthly.net, theme::balance_color(monthly.net < Decimal::ZERO)),
    ])
    .block(theme::panel(format!(
        "{} ({} txns)",
        monthly.label(),
        monthly.transactions.len()
    )));

    f.render_widget(report, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let title = format!("Top {} Expense Categories", app.settings.breakdown_limit);

    if app.overview.breakdown.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses this month. Add one with :add",
            theme::dim_style(),
        )))
        .centered()
        .block(theme::panel(title));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .overview
        .breakdown
        .iter()
        .map(|entry| {
            let val = entry.amount.to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .text_value(format_amount(entry.amount))
                .label(Line::from(truncate(&entry.category, 14)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel(title))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_budget_gauge(f: &mut Frame, area: Rect, app: &App) {
    let usage = &app.overview.budget_usage;
    let over = usage.is_over_budget();
    let color = if over { theme::RED } else { theme::GREEN };

    let ratio = (usage.fill_percentage() / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let label = if over {
        format!(
            "{} of {} ({:.1}%) over by {}",
            format_amount(usage.spent),
            format_amount(usage.budget),
            usage.percentage,
            format_amount(usage.remaining.abs())
        )
    } else {
        format!(
            "{} of {} ({:.1}%) {} left",
            format_amount(usage.spent),
            format_amount(usage.budget),
            usage.percentage,
            format_amount(usage.remaining)
        )
    };

    let gauge = Gauge::default()
        .block(theme::panel("Monthly Budget"))
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(ratio)
        .label(Span::styled(
            label,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(gauge, area);
}
