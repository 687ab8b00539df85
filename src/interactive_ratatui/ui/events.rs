use crate::interactive_ratatui::domain::models::{SortField, UserRecord};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    QuerySettled(String),
    SelectResult(usize),

    // Sort events
    ToggleSort(SortField),

    // Fetch events
    Refresh,
    FetchCompleted { id: u64, users: Vec<UserRecord> },
    FetchFailed { id: u64, error: String },

    // UI events
    SetStatus(String),
    /// Clear the status only if it still shows this text
    ClearStatus(String),
}
