use crate::interactive_ratatui::application::directory_service::UserDirectory;
use crate::interactive_ratatui::domain::models::FetchRequest;
use crate::interactive_ratatui::ui::events::Message;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

/// Start the background thread that performs fetches.
///
/// Results come back as `FetchCompleted` / `FetchFailed` messages on `events`.
/// The thread exits once the returned sender is dropped or `events` closes.
pub fn start_fetch_worker(
    directory: Arc<dyn UserDirectory>,
    events: Sender<Message>,
) -> Result<Sender<FetchRequest>> {
    let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();

    thread::Builder::new()
        .name("fetch-worker".to_string())
        .spawn(move || run_worker(directory.as_ref(), &request_rx, &events))
        .context("Failed to spawn fetch worker")?;

    Ok(request_tx)
}

fn run_worker(
    directory: &dyn UserDirectory,
    requests: &Receiver<FetchRequest>,
    events: &Sender<Message>,
) {
    while let Ok(mut request) = requests.recv() {
        // Only the newest queued request can still be applied
        while let Ok(newer) = requests.try_recv() {
            debug!(skipped = request.id, next = newer.id, "Skipping superseded fetch");
            request = newer;
        }

        let message = match directory.fetch_users(&request.query) {
            Ok(users) => Message::FetchCompleted {
                id: request.id,
                users,
            },
            Err(e) => {
                let error = format!("{e:#}");
                warn!(id = request.id, %error, "Fetch failed");
                Message::FetchFailed {
                    id: request.id,
                    error,
                }
            }
        };

        if events.send(message).is_err() {
            break;
        }
    }
    debug!("Fetch worker stopped");
}
