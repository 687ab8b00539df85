use super::InteractiveBrowser;
use super::application::directory_service::UserDirectory;
use super::constants::{EXIT_PROMPT, TYPING_MESSAGE};
use super::domain::models::{SortDirection, SortField, UserQuery, UserRecord};
use crate::config::Config;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Default)]
struct RecordingDirectory {
    queries: Mutex<Vec<UserQuery>>,
}

impl RecordingDirectory {
    fn queries(&self) -> Vec<UserQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl UserDirectory for RecordingDirectory {
    fn fetch_users(&self, query: &UserQuery) -> Result<Vec<UserRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(vec![UserRecord {
            id: "1".to_string(),
            name: format!("match for '{}'", query.search),
            company: "Acme".to_string(),
            avatar_url: None,
        }])
    }
}

fn browser() -> (InteractiveBrowser, Arc<RecordingDirectory>) {
    let directory = Arc::new(RecordingDirectory::default());
    let config = Config {
        debounce: Duration::from_millis(200),
        ..Config::default()
    };
    (InteractiveBrowser::new(&config, directory.clone()), directory)
}

fn wait_until_idle(browser: &mut InteractiveBrowser) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        browser.tick(Instant::now());
        if !browser.state().search.is_loading {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("browser never became idle");
}

fn type_text(browser: &mut InteractiveBrowser, text: &str) {
    for c in text.chars() {
        browser.handle_input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

#[test]
fn test_mount_fetches_default_query() {
    let (mut browser, directory) = browser();
    browser.mount().unwrap();
    assert!(browser.state().search.is_loading);

    wait_until_idle(&mut browser);

    let queries = directory.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].query_string(), "sortBy=name&order=asc&search=");
    assert_eq!(browser.state().search.results.len(), 1);
}

#[test]
fn test_typing_burst_issues_single_fetch_after_debounce() {
    let (mut browser, directory) = browser();
    browser.mount().unwrap();
    wait_until_idle(&mut browser);

    type_text(&mut browser, "acme");
    assert_eq!(browser.state().search.display_query, "acme");
    assert_eq!(browser.state().search.effective_query, "");
    assert!(!browser.state().search.is_loading);
    assert!(browser.debounce_deadline().is_some());

    browser.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(browser.state().search.effective_query, "acme");
    wait_until_idle(&mut browser);

    let queries = directory.queries();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[1].search, "acme");
    assert_eq!(browser.state().search.results[0].name, "match for 'acme'");
}

#[test]
fn test_sort_key_fetches_immediately() {
    let (mut browser, directory) = browser();
    browser.mount().unwrap();
    wait_until_idle(&mut browser);

    browser.handle_input(KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE));
    assert!(browser.state().search.is_loading);
    wait_until_idle(&mut browser);

    browser.handle_input(KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE));
    wait_until_idle(&mut browser);

    let queries = directory.queries();
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[1].sort.field, SortField::Company);
    assert_eq!(queries[1].sort.direction, SortDirection::Ascending);
    assert_eq!(queries[2].sort.direction, SortDirection::Descending);
}

#[test]
fn test_teardown_cancels_pending_search() {
    let (mut browser, directory) = browser();
    browser.mount().unwrap();
    wait_until_idle(&mut browser);

    type_text(&mut browser, "zed");
    browser.teardown();
    assert!(!browser.is_mounted());
    assert!(browser.debounce_deadline().is_none());

    browser.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(browser.state().search.effective_query, "");
    assert_eq!(directory.queries().len(), 1);
}

#[test]
fn test_fetch_without_worker_surfaces_error() {
    let (mut browser, _directory) = browser();

    browser.handle_input(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE));

    let search = &browser.state().search;
    assert!(!search.is_loading);
    assert_eq!(search.error.as_deref(), Some("Fetch worker is not running"));
}

#[test]
fn test_exit_keys() {
    let (mut browser, _directory) = browser();

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!browser.handle_input(ctrl_c));
    assert_eq!(browser.state().ui.message.as_deref(), Some(EXIT_PROMPT));
    assert!(browser.handle_input(ctrl_c));

    assert!(browser.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
}

#[test]
fn test_reload_refetches_current_query() {
    let (mut browser, directory) = browser();
    browser.mount().unwrap();
    wait_until_idle(&mut browser);

    browser.handle_input(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
    wait_until_idle(&mut browser);

    let queries = directory.queries();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0], queries[1]);
}

#[test]
fn test_expired_exit_prompt_keeps_typing_status() {
    let directory = Arc::new(RecordingDirectory::default());
    let config = Config {
        debounce: Duration::from_secs(60),
        ..Config::default()
    };
    let mut browser = InteractiveBrowser::new(&config, directory);
    browser.mount().unwrap();
    wait_until_idle(&mut browser);

    browser.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(browser.state().ui.message.as_deref(), Some(EXIT_PROMPT));
    type_text(&mut browser, "a");

    browser.tick(Instant::now() + Duration::from_secs(10));
    assert_eq!(browser.state().ui.message.as_deref(), Some(TYPING_MESSAGE));
    assert_eq!(browser.state().search.effective_query, "");
}
