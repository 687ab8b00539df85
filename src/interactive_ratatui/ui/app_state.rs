use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::{FetchRequest, SortSpec, UserQuery, UserRecord};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use tracing::{debug, info};

pub struct AppState {
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    /// Text as typed, echoed in the search box.
    pub display_query: String,
    /// Debounced text actually sent to the endpoint.
    pub effective_query: String,
    pub sort: SortSpec,
    pub results: Vec<UserRecord>,
    pub selected_index: usize,
    pub is_loading: bool,
    pub current_fetch_id: u64,
    pub error: Option<String>,
}

impl SearchState {
    pub fn user_query(&self) -> UserQuery {
        UserQuery::new(self.sort, self.effective_query.clone())
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.results.get(self.selected_index)
    }
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            search: SearchState {
                display_query: String::new(),
                effective_query: String::new(),
                sort: SortSpec::default(),
                results: Vec::new(),
                selected_index: 0,
                is_loading: false,
                current_fetch_id: 0,
                error: None,
            },
            ui: UiState { message: None },
        }
    }

    /// Apply a message and return the side effect the view must perform.
    ///
    /// Any message that changes the sort or the effective query by value
    /// results in exactly one `Command::Fetch`.
    pub fn update(&mut self, msg: Message) -> Command {
        let before = (self.search.sort, self.search.effective_query.clone());
        let command = self.apply(msg);

        let changed = before.0 != self.search.sort || before.1 != self.search.effective_query;
        if changed && command == Command::None {
            return self.begin_fetch();
        }
        command
    }

    fn apply(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.display_query = q.clone();
                self.ui.message = Some(TYPING_MESSAGE.to_string());
                Command::DebounceQuery(q)
            }
            Message::QuerySettled(q) => {
                if self.ui.message.as_deref() == Some(TYPING_MESSAGE) {
                    self.ui.message = None;
                }
                self.search.effective_query = q;
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::ToggleSort(field) => {
                self.search.sort = self.search.sort.toggle(field);
                Command::None
            }
            Message::Refresh => self.begin_fetch(),
            Message::FetchCompleted { id, users } => {
                if id != self.search.current_fetch_id {
                    debug!(id, current = self.search.current_fetch_id, "Discarding stale response");
                    return Command::None;
                }
                info!(id, count = users.len(), "Applied fetch result");
                self.search.results = users;
                self.search.selected_index = 0;
                self.search.is_loading = false;
                self.search.error = None;
                Command::None
            }
            Message::FetchFailed { id, error } => {
                if id != self.search.current_fetch_id {
                    debug!(id, current = self.search.current_fetch_id, "Discarding stale failure");
                    return Command::None;
                }
                self.search.is_loading = false;
                self.search.error = Some(error);
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.message = Some(status);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus(expected) => {
                if self.ui.message.as_deref() == Some(expected.as_str()) {
                    self.ui.message = None;
                }
                Command::None
            }
        }
    }

    /// Tag a new request with the next sequence number and mark loading.
    fn begin_fetch(&mut self) -> Command {
        self.search.current_fetch_id += 1;
        self.search.is_loading = true;

        let request = FetchRequest {
            id: self.search.current_fetch_id,
            query: self.search.user_query(),
        };
        debug!(id = request.id, query = %request.query.query_string(), "Dispatching fetch");
        Command::Fetch(request)
    }
}
