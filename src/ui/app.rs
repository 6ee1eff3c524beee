use chrono::NaiveDate;

use spendtui::config::Settings;
use spendtui::debounce::Debouncer;
use spendtui::filter::TransactionFilter;
use spendtui::report::{compute_overview, Clock, Overview};
use spendtui::{Transaction, TransactionForm, TransactionId, TransactionStore};

use super::util::scroll_into_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: TransactionId, description: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) status_is_error: bool,
    pub(crate) show_help: bool,

    pub(crate) store: TransactionStore,
    pub(crate) settings: Settings,
    clock: Box<dyn Clock>,

    // Dashboard
    pub(crate) overview: Overview,

    // Transactions
    pub(crate) filter: TransactionFilter,
    pub(crate) search_debounce: Debouncer,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    /// Set by `e` so `:edit` targets the row it was opened from.
    pub(crate) editing_id: Option<TransactionId>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: TransactionStore, settings: Settings, clock: Box<dyn Clock>) -> Self {
        let today = clock.today();
        let overview = compute_overview(
            store.get_all(),
            store.budget(),
            today,
            settings.breakdown_limit,
        );
        let filter = TransactionFilter::default();
        let transactions = filter.apply(store.get_all());
        let search_debounce = Debouncer::new(settings.search_debounce);

        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            status_is_error: false,
            show_help: false,

            store,
            settings,
            clock,

            overview,

            filter,
            search_debounce,
            transactions,
            transaction_index: 0,
            transaction_scroll: 0,
            editing_id: None,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Recompute every derived view from the store.
    pub(crate) fn refresh_all(&mut self) {
        self.refresh_dashboard();
        self.refresh_transactions();
    }

    pub(crate) fn refresh_dashboard(&mut self) {
        self.overview = compute_overview(
            self.store.get_all(),
            self.store.budget(),
            self.today(),
            self.settings.breakdown_limit,
        );
    }

    pub(crate) fn refresh_transactions(&mut self) {
        self.transactions = self.filter.apply(self.store.get_all());
        if self.transaction_index >= self.transactions.len() {
            self.transaction_index = self.transactions.len().saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    /// Apply the typed search text to the transactions view.
    pub(crate) fn apply_search(&mut self) {
        self.search_debounce.cancel();
        if self.filter.search == self.search_input {
            return;
        }
        self.filter.search = self.search_input.clone();
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.refresh_transactions();
    }

    /// Rows of the transactions table below its header.
    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.saturating_sub(1).max(1)
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.transaction_index)
    }

    /// Add a transaction, or replace `id` when given, and report the outcome.
    pub(crate) fn submit_transaction(&mut self, id: Option<TransactionId>, form: &TransactionForm) {
        let result = match id {
            Some(id) => self.store.update_transaction(id, form).map(|t| t.id),
            None => self.store.add_transaction(form).map(|t| t.id),
        };
        match result {
            Ok(saved) => {
                self.editing_id = None;
                self.refresh_all();
                if let Some(pos) = self.transactions.iter().position(|t| t.id == saved) {
                    self.transaction_index = pos;
                    let page = self.transaction_page();
                    scroll_into_view(self.transaction_index, &mut self.transaction_scroll, page);
                }
                self.set_status("Transaction saved successfully!");
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Run the action awaiting confirmation and leave confirm mode.
    pub(crate) fn confirm_pending(&mut self) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteTransaction { id, description } => {
                    let result = self.store.delete_transaction(id);
                    self.refresh_all();
                    match result {
                        Ok(_) => {
                            tracing::debug!(
                                %id,
                                description = %description,
                                "deleted from the transactions view"
                            );
                            self.set_status("Transaction deleted successfully!");
                        }
                        Err(e) => self.set_error(e.to_string()),
                    }
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = false;
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = true;
    }
}
