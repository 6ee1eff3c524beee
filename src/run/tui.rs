use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use spendtui::TransactionForm;

use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// Poll timeout while no search is pending.
const IDLE_TICK: Duration = Duration::from_millis(250);

pub(crate) fn as_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders
            let content_height = f.area().height.saturating_sub(5) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        let timeout = app
            .search_debounce
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_TICK);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app)?;
                }
            }
        }

        if app.search_debounce.fire(Instant::now()) {
            app.apply_search();
        }
    }
    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app),
        InputMode::Search => {
            handle_search_input(key, app);
            Ok(())
        }
        InputMode::Confirm => {
            handle_confirm_input(key, app);
            Ok(())
        }
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input = app.filter.search.clone();
            app.screen = Screen::Transactions;
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('G') => {
            let page = app.transaction_page();
            scroll_to_bottom(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                app.transactions.len(),
                page,
            );
        }
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Transactions),
        KeyCode::Tab | KeyCode::BackTab => {
            let next = match app.screen {
                Screen::Dashboard => Screen::Transactions,
                Screen::Transactions => Screen::Dashboard,
            };
            switch_screen(app, next);
        }
        KeyCode::Char('e') if app.screen == Screen::Transactions => begin_edit(app),
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            commands::handle_command("delete", app)?;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
            app.editing_id = None;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            if input.split_whitespace().next() != Some("edit") {
                app.editing_id = None;
            }
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            app.editing_id = None;
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
                app.editing_id = None;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.editing_id = None;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
                app.editing_id = None;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

/// Typing rearms the debounce; Enter applies at once and Esc clears.
fn handle_search_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.apply_search();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.apply_search();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.search_debounce.touch(Instant::now());
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.clear();
            app.search_debounce.touch(Instant::now());
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.search_debounce.touch(Instant::now());
        }
        _ => {}
    }
}

fn handle_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(),
        _ => app.cancel_pending(),
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Dashboard => app.refresh_dashboard(),
        Screen::Transactions => app.refresh_transactions(),
    }
    app.set_status(format!("{screen}"));
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Transactions {
        let page = app.transaction_page();
        scroll_down(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.transactions.len(),
            page,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Transactions {
        scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
    }
}

/// Open the command line pre-filled with the selected transaction.
fn begin_edit(app: &mut App) {
    let Some(txn) = app.selected_transaction() else {
        app.set_error("No transaction selected");
        return;
    };
    let id = txn.id;
    let line = commands::edit_command_for(&TransactionForm::from(txn));

    app.editing_id = Some(id);
    app.command_input = line;
    app.input_mode = InputMode::Command;
    app.set_status(format!("Editing transaction {id}"));
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
