use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use spendtui::TransactionType;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn table_header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row highlighted, other rows striped.
pub(crate) fn row_style(index: usize, cursor: usize) -> Style {
    if index == cursor {
        Style::default().fg(HEADER_BG).bg(ACCENT)
    } else if index % 2 == 1 {
        Style::default().fg(TEXT).bg(SURFACE)
    } else {
        normal_style()
    }
}

pub(crate) fn kind_color(kind: TransactionType) -> Color {
    match kind {
        TransactionType::Income => GREEN,
        TransactionType::Expense => RED,
    }
}

pub(crate) fn balance_color(negative: bool) -> Color {
    if negative {
        RED
    } else {
        GREEN
    }
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

pub(crate) fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(OVERLAY))
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD),
        ))
}
