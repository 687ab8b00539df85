pub mod config;
pub mod debounce;
pub mod interactive_ratatui;
pub mod logging;
pub mod output;

#[cfg(test)]
mod debounce_test;

pub use config::Config;
pub use debounce::{BoxedDebounced, Debounced};
pub use interactive_ratatui::InteractiveBrowser;
pub use interactive_ratatui::application::directory_service::{DirectoryService, UserDirectory};
pub use interactive_ratatui::domain::models::{
    SortDirection, SortField, SortSpec, UserQuery, UserRecord,
};
pub use logging::{LogFormat, LogSink, init_tracing};
pub use output::{OutputFormat, write_users};
