use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands::COMMANDS;
use super::theme;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("1 / 2, Tab", "Switch screen"),
    ("j / k", "Move selection"),
    ("g / G", "First / last transaction"),
    ("Ctrl-d / Ctrl-u", "Half page down / up"),
    ("/", "Live search (Enter applies, Esc clears)"),
    (":", "Command line"),
    ("e", "Edit selected transaction"),
    ("D", "Delete selected transaction"),
    ("?", "This help"),
    ("Ctrl-q", "Quit"),
];

pub(crate) fn render(f: &mut Frame, app: &App) {
    let [tabs, body, status, command] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_tab_bar(f, tabs, app);
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, body, app),
        Screen::Transactions => super::screens::transactions::render(f, body, app),
    }
    render_status_bar(f, status, app);
    render_command_bar(f, command, app);

    if app.show_help {
        render_help(f);
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = Screen::all()
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);
    let titles = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}:{s}", i + 1));

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG))
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(theme::OVERLAY)));

    f.render_widget(tabs, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_color = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Search => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    };

    let mut left = vec![
        Span::styled(
            format!(" {} ", app.input_mode),
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} | {} txns",
            app.overview.monthly.label(),
            app.store.len()
        )),
    ];
    if !app.filter.category.is_empty() {
        left.push(Span::raw(format!(" | category: {}", app.filter.category)));
    }

    let hint = match app.screen {
        Screen::Dashboard => ":add  :budget  ? help ",
        Screen::Transactions => "e edit  D delete  / search  ? help ",
    };

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hint.len() as u16)])
            .areas(area);
    f.render_widget(
        Paragraph::new(Line::from(left)).style(theme::status_bar_style()),
        left_area,
    );
    f.render_widget(
        Paragraph::new(hint)
            .right_aligned()
            .style(theme::status_bar_style()),
        right_area,
    );
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (line, cursor) = command_line(app);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::COMMAND_BG)),
        area,
    );
    if let Some(col) = cursor {
        f.set_cursor_position((area.x + col, area.y));
    }
}

/// The bottom line for the current mode and where the cursor sits on it.
fn command_line(app: &App) -> (Line<'_>, Option<u16>) {
    let input_line = |prompt: &'static str, color: Color, text: &str| {
        let col = 1 + text.chars().count() as u16;
        (
            vec![
                Span::styled(prompt, Style::default().fg(color)),
                Span::styled(text.to_string(), theme::command_bar_style()),
            ],
            Some(col),
        )
    };

    match app.input_mode {
        InputMode::Command => {
            let (spans, col) = input_line(":", theme::ACCENT, &app.command_input);
            (Line::from(spans), col)
        }
        InputMode::Search => {
            let (mut spans, col) = input_line("/", theme::YELLOW, &app.search_input);
            if app.search_debounce.is_pending() {
                spans.push(Span::styled("  …", theme::dim_style()));
            } else if !app.filter.search.is_empty() {
                spans.push(Span::styled(
                    format!("  {} shown", app.transactions.len()),
                    theme::dim_style(),
                ));
            }
            (Line::from(spans), col)
        }
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(
                    app.confirm_message.as_str(),
                    Style::default().fg(theme::YELLOW),
                ),
                Span::styled(" (y to confirm)", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal if app.status_message.is_empty() => (
            Line::from(Span::styled(
                " : command  / search  ? help",
                theme::dim_style(),
            )),
            None,
        ),
        InputMode::Normal => {
            let style = if app.status_is_error {
                theme::error_style()
            } else {
                theme::command_bar_style()
            };
            (
                Line::from(Span::styled(app.status_message.as_str(), style)),
                None,
            )
        }
    }
}

fn render_help(f: &mut Frame) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |key: String, what: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<18}"), Style::default().fg(theme::ACCENT)),
            Span::styled(what.to_string(), theme::normal_style()),
        ])
    };

    let mut lines = vec![heading("Keys")];
    lines.extend(KEY_BINDINGS.iter().map(|&(k, v)| entry(k.to_string(), v)));
    lines.push(Line::from(""));
    lines.push(heading("Commands"));

    // Long names only; aliases share a description with their full command
    let mut commands: Vec<(&str, &str)> = COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 2)
        .map(|(name, cmd)| (*name, cmd.description))
        .collect();
    commands.sort_unstable();
    commands.dedup_by_key(|(_, desc)| *desc);
    lines.extend(commands.into_iter().map(|(n, d)| entry(format!(":{n}"), d)));

    let height = (lines.len() as u16 + 2).min(f.area().height);
    let width = 86.min(f.area().width);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(" SpendTUI Help ")
            .title_bottom(Line::from(" any key closes ").centered())
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
