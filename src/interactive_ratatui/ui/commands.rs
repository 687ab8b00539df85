use crate::interactive_ratatui::domain::models::FetchRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    DebounceQuery(String), // feed the search debouncer
    Fetch(FetchRequest),
    ScheduleClearMessage(u64), // delay in milliseconds
}
