//! Constants for the interactive TUI module

// Timing constants
/// Default quiet period before typed text becomes the effective query
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Upper bound for the event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Public mock endpoint used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://63850ace3fa7acb14f08591d.mockapi.io";

// Status messages
pub const TYPING_MESSAGE: &str = "typing...";
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
pub const LOADING_MESSAGE: &str = "Loading users...";
pub const EMPTY_MESSAGE: &str = "No users found";

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the sort bar component
pub const SORT_BAR_HEIGHT: u16 = 1;

/// Height of the inline error line
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;
