//! Periodic refresh loop
//!
//! A single task owns the fetcher, so refresh cycles never overlap. Commands
//! that arrive while a cycle is in flight are coalesced into the next one.
//! The page to load is published by the UI on a watch channel, so a command
//! lost to a full queue never leaves the worker on another page.

use super::core::{EventSender, WorkerConfig};
use super::fetcher::{DataFetcher, RefreshKind, RefreshOutcome};
use crate::dashboard::pagination::Pagination;
use crate::events::{EventType, WorkerUpdate};
use crate::logging::LogLevel;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::{CancellationToken, DropGuard};

/// Requests sent from the UI to the refresh worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshCommand {
    /// Reload stats and the current page now.
    Refresh,
    /// Switch to a page and load it.
    GoToPage(u32),
    /// Reload the current page only.
    ReloadProxies,
}

impl RefreshKind {
    fn merge(self, other: RefreshKind) -> RefreshKind {
        match (self, other) {
            (RefreshKind::ProxiesOnly, RefreshKind::ProxiesOnly) => RefreshKind::ProxiesOnly,
            _ => RefreshKind::Full,
        }
    }
}

enum Wake {
    Tick,
    Command(RefreshCommand),
    Stop,
}

pub struct RefreshWorker {
    fetcher: DataFetcher,
    pagination: Pagination,
    /// Page the UI is showing. Read before every cycle.
    page: watch::Receiver<u32>,
    commands: mpsc::Receiver<RefreshCommand>,
    event_sender: EventSender,
    config: WorkerConfig,
    cancel: CancellationToken,
}

impl RefreshWorker {
    pub fn new(
        fetcher: DataFetcher,
        page: watch::Receiver<u32>,
        commands: mpsc::Receiver<RefreshCommand>,
        event_sender: EventSender,
        config: WorkerConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            fetcher,
            pagination: Pagination::new(config.page_size),
            page,
            commands,
            event_sender,
            config,
            cancel,
        }
    }

    /// Runs until cancelled or until the UI drops its side of either channel.
    ///
    /// The first tick fires immediately, which performs the initial load.
    pub async fn run(mut self) {
        let mut ticker = interval(self.config.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.event_sender
            .send_scheduler_event(
                format!(
                    "Polling {} every {}s",
                    self.config.environment.api_url(),
                    self.config.refresh_interval.as_secs()
                ),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        loop {
            let wake = tokio::select! {
                _ = self.cancel.cancelled() => Wake::Stop,
                _ = ticker.tick() => Wake::Tick,
                command = self.commands.recv() => match command {
                    Some(command) => Wake::Command(command),
                    None => Wake::Stop,
                },
            };

            let kind = match wake {
                Wake::Stop => break,
                Wake::Tick => RefreshKind::Full,
                Wake::Command(command) => self.apply_command(command),
            };
            let kind = self.coalesce(kind);
            self.sync_page();

            if !self
                .event_sender
                .send_update(WorkerUpdate::Loading {
                    page: self.pagination.current_page(),
                })
                .await
            {
                break;
            }

            let outcome = tokio::select! {
                _ = self.cancel.cancelled() => break,
                outcome = self.execute(kind) => outcome,
            };

            if kind == RefreshKind::Full {
                ticker.reset();
                self.event_sender
                    .send_scheduler_event(
                        format!(
                            "Refresh finished in {:.0}ms, next in {}s",
                            outcome.elapsed.as_secs_f64() * 1000.0,
                            self.config.refresh_interval.as_secs()
                        ),
                        EventType::Waiting,
                        LogLevel::Debug,
                    )
                    .await;
            }

            if !self
                .event_sender
                .send_update(WorkerUpdate::Refreshed(outcome))
                .await
            {
                break;
            }
        }

        log::debug!("Refresh worker stopped");
    }

    fn apply_command(&mut self, command: RefreshCommand) -> RefreshKind {
        match command {
            RefreshCommand::Refresh => RefreshKind::Full,
            RefreshCommand::GoToPage(page) => {
                self.pagination.go_to(page as i64);
                RefreshKind::ProxiesOnly
            }
            RefreshCommand::ReloadProxies => RefreshKind::ProxiesOnly,
        }
    }

    /// Adopts the page last published by the UI.
    fn sync_page(&mut self) {
        let page = *self.page.borrow_and_update();
        if page != self.pagination.current_page() && !self.pagination.go_to(page as i64) {
            log::warn!("Ignoring invalid page {} from the UI", page);
        }
    }

    /// Folds queued commands into one cycle. The last requested page wins.
    fn coalesce(&mut self, mut kind: RefreshKind) -> RefreshKind {
        while let Ok(command) = self.commands.try_recv() {
            let next = self.apply_command(command);
            kind = kind.merge(next);
        }
        kind
    }

    async fn execute(&self, kind: RefreshKind) -> RefreshOutcome {
        match kind {
            RefreshKind::Full => self.fetcher.load_dashboard_data(&self.pagination).await,
            RefreshKind::ProxiesOnly => self.fetcher.reload_proxies(&self.pagination).await,
        }
    }
}

/// Handle kept by the UI. Dropping it stops the worker.
pub struct RefreshHandle {
    commands: mpsc::Sender<RefreshCommand>,
    page: watch::Sender<u32>,
    cancel: CancellationToken,
    join_handle: JoinHandle<()>,
    _guard: DropGuard,
}

impl RefreshHandle {
    /// Queues a command without waiting. A full queue already holds a pending
    /// refresh, so a rejected command is dropped. Page changes are published
    /// before queueing and survive a dropped command.
    pub fn send(&self, command: RefreshCommand) -> bool {
        if let RefreshCommand::GoToPage(page) = command {
            self.page.send_replace(page);
        }
        match self.commands.try_send(command) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Refresh command dropped: {}", e);
                false
            }
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cancels the worker, abandoning any in-flight request, and waits for it to exit.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.join_handle.await;
    }
}

/// Spawns the refresh worker on the current runtime.
pub fn spawn_refresh_worker(
    fetcher: DataFetcher,
    event_sender: EventSender,
    config: WorkerConfig,
    command_queue_size: usize,
) -> RefreshHandle {
    let (command_sender, command_receiver) = mpsc::channel(command_queue_size);
    let (page_sender, page_receiver) = watch::channel(1);
    let cancel = CancellationToken::new();
    let worker = RefreshWorker::new(
        fetcher,
        page_receiver,
        command_receiver,
        event_sender,
        config,
        cancel.clone(),
    );
    let join_handle = tokio::spawn(worker.run());

    RefreshHandle {
        commands: command_sender,
        page: page_sender,
        _guard: cancel.clone().drop_guard(),
        cancel,
        join_handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockProxyPoolApi, ProxyPage, ProxyRecord, StatsSnapshot};
    use crate::dashboard::Dashboard;
    use crate::dashboard::table::TableState;
    use crate::environment::Environment;
    use mockall::predicate::eq;
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::time::timeout;

    fn records(n: usize) -> Vec<ProxyRecord> {
        (0..n)
            .map(|i| ProxyRecord::new(&format!("10.0.0.{}:3128", i), 70.0, "now"))
            .collect()
    }

    fn start(
        api: MockProxyPoolApi,
        refresh_interval: Duration,
    ) -> (RefreshHandle, mpsc::Receiver<WorkerUpdate>) {
        start_with_queue(api, refresh_interval, 8)
    }

    fn start_with_queue(
        api: MockProxyPoolApi,
        refresh_interval: Duration,
        queue_size: usize,
    ) -> (RefreshHandle, mpsc::Receiver<WorkerUpdate>) {
        let (tx, rx) = mpsc::channel(64);
        let event_sender = EventSender::new(tx);
        let mut config = WorkerConfig::new(Environment::Local);
        config.refresh_interval = refresh_interval;
        let fetcher = DataFetcher::new(Box::new(api), event_sender.clone());
        (spawn_refresh_worker(fetcher, event_sender, config, queue_size), rx)
    }

    async fn next_outcome(rx: &mut mpsc::Receiver<WorkerUpdate>) -> RefreshOutcome {
        loop {
            let update = timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("timed out waiting for a refresh")
                .expect("worker exited");
            if let WorkerUpdate::Refreshed(outcome) = update {
                return outcome;
            }
        }
    }

    #[tokio::test]
    async fn test_initial_load_then_page_navigation() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats()
            .times(1)
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_get_proxies()
            .with(eq(20u32), eq(0u64))
            .times(1)
            .returning(|_, _| {
                Ok(ProxyPage {
                    proxies: records(20),
                    total: Some(45),
                })
            });
        api.expect_get_proxies()
            .with(eq(20u32), eq(40u64))
            .times(1)
            .returning(|_, _| {
                Ok(ProxyPage {
                    proxies: records(5),
                    total: Some(45),
                })
            });

        let (handle, mut rx) = start(api, Duration::from_secs(3600));

        let initial = next_outcome(&mut rx).await;
        assert_eq!(initial.kind, RefreshKind::Full);
        assert_eq!(initial.page, 1);

        assert!(handle.send(RefreshCommand::GoToPage(3)));
        let page = next_outcome(&mut rx).await;
        assert_eq!(page.kind, RefreshKind::ProxiesOnly);
        assert_eq!(page.page, 3);
        assert!(page.stats.is_none());
        assert_eq!(page.proxies.unwrap().proxies.len(), 5);

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_timer_triggers_full_refreshes() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats()
            .times(2..)
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_get_proxies()
            .times(2..)
            .returning(|_, _| Ok(ProxyPage::default()));

        let (handle, mut rx) = start(api, Duration::from_millis(50));
        assert_eq!(next_outcome(&mut rx).await.kind, RefreshKind::Full);
        assert_eq!(next_outcome(&mut rx).await.kind, RefreshKind::Full);
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_dropped_page_change_still_reaches_the_worker() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats()
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_get_proxies()
            .with(eq(20u32), eq(40u64))
            .times(1..)
            .returning(|_, _| {
                Ok(ProxyPage {
                    proxies: records(20),
                    total: Some(400),
                })
            });

        // The worker has not run yet, so the one-slot queue fills up
        let (handle, mut rx) = start_with_queue(api, Duration::from_secs(3600), 1);
        assert!(handle.send(RefreshCommand::GoToPage(2)));
        assert!(!handle.send(RefreshCommand::GoToPage(3)));

        let outcome = next_outcome(&mut rx).await;
        assert_eq!(outcome.page, 3);

        // A UI that moved to page 3 accepts the result instead of staying in Loading
        let mut dashboard = Dashboard::new(20, PathBuf::from("."));
        assert!(dashboard.go_to_page(2));
        assert!(dashboard.go_to_page(3));
        dashboard.apply_refresh(outcome);
        assert!(matches!(dashboard.table().state(), TableState::Loaded(_)));
        assert_eq!(dashboard.table().visible_count(), 20);

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_commands_queued_during_a_load_become_one_cycle() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats()
            .times(2)
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_get_proxies()
            .with(eq(20u32), eq(0u64))
            .times(1)
            .returning(|_, _| Ok(ProxyPage::default()));
        api.expect_get_proxies()
            .with(eq(20u32), eq(80u64))
            .times(1)
            .returning(|_, _| Ok(ProxyPage::default()));

        let (handle, mut rx) = start(api, Duration::from_secs(3600));
        let initial = next_outcome(&mut rx).await;
        assert_eq!(initial.kind, RefreshKind::Full);

        // Queued before the worker wakes again: folded into a single load
        assert!(handle.send(RefreshCommand::GoToPage(2)));
        assert!(handle.send(RefreshCommand::Refresh));
        assert!(handle.send(RefreshCommand::ReloadProxies));
        assert!(handle.send(RefreshCommand::GoToPage(5)));

        let follow_up = next_outcome(&mut rx).await;
        assert_eq!(follow_up.kind, RefreshKind::Full);
        assert_eq!(follow_up.page, 5);
        assert!(follow_up.stats.is_some());

        // Nothing else was scheduled
        assert!(
            timeout(Duration::from_millis(200), next_outcome(&mut rx))
                .await
                .is_err()
        );
        handle.shutdown().await;
    }

    #[test]
    fn test_merge_prefers_full_refresh() {
        assert_eq!(
            RefreshKind::ProxiesOnly.merge(RefreshKind::ProxiesOnly),
            RefreshKind::ProxiesOnly
        );
        assert_eq!(
            RefreshKind::ProxiesOnly.merge(RefreshKind::Full),
            RefreshKind::Full
        );
        assert_eq!(
            RefreshKind::Full.merge(RefreshKind::ProxiesOnly),
            RefreshKind::Full
        );
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_worker() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats()
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_get_proxies()
            .returning(|_, _| Ok(ProxyPage::default()));

        let (handle, mut rx) = start(api, Duration::from_secs(3600));
        next_outcome(&mut rx).await;

        let token = handle.cancellation_token();
        timeout(Duration::from_secs(5), handle.shutdown())
            .await
            .expect("worker did not stop");
        assert!(token.is_cancelled());

        // Every sender is gone once the worker exits
        while let Ok(Some(_)) = timeout(Duration::from_secs(5), rx.recv()).await {}
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_dropping_the_handle_cancels() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats()
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_get_proxies()
            .returning(|_, _| Ok(ProxyPage::default()));

        let (handle, mut rx) = start(api, Duration::from_secs(3600));
        next_outcome(&mut rx).await;
        let token = handle.cancellation_token();
        drop(handle);
        assert!(token.is_cancelled());
    }
}
