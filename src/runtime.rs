//! Wiring for the background refresh worker

use crate::api::ProxyPoolApi;
use crate::consts::dashboard_consts::{COMMAND_QUEUE_SIZE, UPDATE_QUEUE_SIZE};
use crate::events::WorkerUpdate;
use crate::workers::core::{EventSender, WorkerConfig};
use crate::workers::fetcher::DataFetcher;
use crate::workers::refresher::{RefreshHandle, spawn_refresh_worker};
use tokio::sync::mpsc;

/// Start the refresh worker. The returned handle stops it when dropped.
pub fn start_refresh_worker(
    api: Box<dyn ProxyPoolApi>,
    config: WorkerConfig,
) -> (mpsc::Receiver<WorkerUpdate>, RefreshHandle) {
    let (update_sender, update_receiver) = mpsc::channel::<WorkerUpdate>(UPDATE_QUEUE_SIZE);
    let event_sender = EventSender::new(update_sender);
    let fetcher = DataFetcher::new(api, event_sender.clone());
    let handle = spawn_refresh_worker(fetcher, event_sender, config, COMMAND_QUEUE_SIZE);
    (update_receiver, handle)
}
