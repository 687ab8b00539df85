use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use userdir::interactive_ratatui::constants::{
    DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use userdir::{
    Config, DirectoryService, InteractiveBrowser, LogFormat, LogSink, OutputFormat, SortDirection,
    SortField, SortSpec, UserDirectory, UserQuery, init_tracing, write_users,
};

#[derive(Parser, Debug)]
#[command(
    name = "userdir",
    version,
    about = "Browse a remote user directory with live search and sorting",
    long_about = None
)]
struct Cli {
    /// Base URL of the directory service (the `/users` path is appended)
    #[arg(long, env = "USERDIR_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Quiet period before a typed search is sent, in milliseconds
    #[arg(long, env = "USERDIR_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "USERDIR_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Write logs to this file
    #[arg(long, env = "USERDIR_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,

    /// Fetch once and print the users instead of starting the browser
    #[arg(long)]
    once: bool,

    /// Sort field for --once
    #[arg(long, default_value = "name", requires = "once")]
    sort: SortField,

    /// Sort order for --once (asc or desc)
    #[arg(long, default_value = "asc", requires = "once")]
    order: SortDirection,

    /// Search term for --once
    #[arg(long, default_value = "", requires = "once")]
    search: String,

    /// Output format for --once
    #[arg(short = 'f', long, value_enum, default_value = "text", requires = "once")]
    format: OutputFormat,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
            request_timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn log_sink(&self) -> LogSink {
        match (&self.log_file, self.once) {
            (Some(path), _) => LogSink::File(path.clone()),
            (None, true) => LogSink::Stderr,
            (None, false) => LogSink::Disabled,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_sink(), cli.log_format)?;

    let config = cli.config();
    let directory = DirectoryService::new(&config.base_url, config.request_timeout)?;
    info!(base_url = %directory.base_url(), "Using directory service");

    if cli.once {
        let query = UserQuery::new(SortSpec::new(cli.sort, cli.order), cli.search.clone());
        let users = directory.fetch_users(&query)?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_users(&mut handle, &query, &users, cli.format)?;
        handle.flush()?;
        return Ok(());
    }

    let mut browser = InteractiveBrowser::new(&config, Arc::new(directory));
    browser.run()
}
