use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::debounce::{BoxedDebounced, Debounced};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod tests;

use self::application::directory_service::UserDirectory;
use self::application::fetch_worker::start_fetch_worker;
use self::constants::*;
use self::domain::models::FetchRequest;
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// The user browser view: owns the state, the debounced search and the
/// channel to the fetch worker for as long as it is mounted.
pub struct InteractiveBrowser {
    state: AppState,
    renderer: Renderer,
    directory: Arc<dyn UserDirectory>,
    events_tx: Sender<Message>,
    events_rx: Receiver<Message>,
    fetch_sender: Option<Sender<FetchRequest>>,
    search_debounce: BoxedDebounced<String>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<(Instant, String)>,
    message_clear_delay: u64,
}

impl InteractiveBrowser {
    pub fn new(config: &Config, directory: Arc<dyn UserDirectory>) -> Self {
        let (events_tx, events_rx) = mpsc::channel();

        let settled_tx = events_tx.clone();
        let on_settled: Box<dyn FnMut(String)> = Box::new(move |query: String| {
            if settled_tx.send(Message::QuerySettled(query)).is_err() {
                debug!("Event channel closed; dropping settled query");
            }
        });

        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            directory,
            events_tx,
            events_rx,
            fetch_sender: None,
            search_debounce: Debounced::new(on_settled, config.debounce),
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let result = self.mount().and_then(|()| self.run_app(&mut terminal));

        self.teardown();
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Start the fetch worker and issue the initial request.
    pub fn mount(&mut self) -> Result<()> {
        let sender = start_fetch_worker(self.directory.clone(), self.events_tx.clone())?;
        self.fetch_sender = Some(sender);
        info!("Browser mounted");
        self.handle_message(Message::Refresh);
        Ok(())
    }

    /// Cancel the pending search and disconnect from the worker. Responses
    /// still in flight are never applied.
    pub fn teardown(&mut self) {
        if self.search_debounce.cancel() {
            debug!("Cancelled pending search on teardown");
        }
        if self.fetch_sender.take().is_some() {
            info!("Browser torn down");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.fetch_sender.is_some()
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.tick(Instant::now());

            if poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// One pass of timer and channel work: fire the debounced search if due,
    /// apply worker results, expire the status message.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }

        self.search_debounce.poll_at(now);

        let pending: Vec<Message> = self.events_rx.try_iter().collect();
        for message in pending {
            self.handle_message(message);
        }

        let clear_delay = Duration::from_millis(self.message_clear_delay);
        let expired = self
            .message_timer
            .as_ref()
            .is_some_and(|(started, _)| now.saturating_duration_since(*started) >= clear_delay);
        if expired {
            if let Some((_, message)) = self.message_timer.take() {
                self.handle_message(Message::ClearStatus(message));
            }
        }
    }

    /// Wait no longer than the next debounce deadline.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let max_wait = Duration::from_millis(EVENT_POLL_INTERVAL_MS);
        self.search_debounce
            .time_until_due(now)
            .map_or(max_wait, |remaining| remaining.min(max_wait))
    }

    /// Returns true when the user asked to quit.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_message(Message::Refresh);
                return false;
            }
            _ => {}
        }

        let message = self
            .renderer
            .get_sort_bar_mut()
            .handle_key(key)
            .or_else(|| match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                    self.renderer.get_result_list_mut().handle_key(key)
                }
                KeyCode::Char('p') | KeyCode::Char('n')
                    if key.modifiers == KeyModifiers::CONTROL =>
                {
                    self.renderer.get_result_list_mut().handle_key(key)
                }
                _ => self.renderer.get_search_bar_mut().handle_key(key),
            });

        if let Some(msg) = message {
            self.handle_message(msg);
        }
        false
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::DebounceQuery(query) => {
                self.search_debounce.call(query);
            }
            Command::Fetch(request) => {
                let id = request.id;
                let sent = self
                    .fetch_sender
                    .as_ref()
                    .is_some_and(|sender| sender.send(request).is_ok());
                if !sent {
                    warn!(id, "Fetch worker unavailable");
                    self.handle_message(Message::FetchFailed {
                        id,
                        error: "Fetch worker is not running".to_string(),
                    });
                }
            }
            Command::ScheduleClearMessage(delay) => {
                if let Some(message) = self.state.ui.message.clone() {
                    self.message_timer = Some((Instant::now(), message));
                }
                self.message_clear_delay = delay;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn debounce_deadline(&self) -> Option<Instant> {
        self.search_debounce.deadline()
    }
}

impl Drop for InteractiveBrowser {
    fn drop(&mut self) {
        self.teardown();
    }
}
