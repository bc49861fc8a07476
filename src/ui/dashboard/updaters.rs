//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from worker updates

use super::state::{DashboardState, RefreshState};

use crate::dashboard::FilterOutcome;
use crate::events::WorkerUpdate;
use crate::workers::fetcher::{RefreshKind, RefreshOutcome};
use crate::workers::refresher::RefreshCommand;

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with a new tick.
    pub fn update(&mut self, now: Instant) {
        self.tick += 1;

        // Process all queued updates one by one
        while let Some(update) = self.pending_updates.pop_front() {
            self.process_update(update, now);
        }

        // Fire the search filter once typing has paused
        if let Some(keyword) = self.search_debouncer_mut().poll(now) {
            self.run_filter(&keyword);
        }

        self.dashboard.notifier_mut().prune(now);
    }

    /// Process a single worker update
    fn process_update(&mut self, update: WorkerUpdate, now: Instant) {
        match update {
            WorkerUpdate::Activity(event) => self.add_to_activity_log(event),
            WorkerUpdate::Loading { page } => {
                self.dashboard.begin_loading(page);
                self.set_refresh_state(RefreshState::Loading { started_at: now });
            }
            WorkerUpdate::Refreshed(outcome) => self.handle_refresh(outcome, now),
        }
    }

    fn handle_refresh(&mut self, outcome: RefreshOutcome, now: Instant) {
        if outcome.kind == RefreshKind::Full {
            self.set_next_refresh_at(Some(now + self.refresh_interval));
        }
        self.set_refresh_state(RefreshState::Idle);
        self.dashboard.apply_refresh(outcome);
    }

    /// Runs the filter right away. An empty keyword reloads the current page.
    pub fn run_filter(&mut self, keyword: &str) {
        if self.dashboard.filter_proxies(keyword) == FilterOutcome::Reload {
            self.queue_command(RefreshCommand::ReloadProxies);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ProxyPage, ProxyRecord, StatsSnapshot};
    use crate::dashboard::table::TableState;
    use crate::environment::Environment;
    use crate::events::{Event, EventType};
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;
    use std::time::Duration;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local, UIConfig::default())
    }

    fn refreshed(kind: RefreshKind, n: usize) -> WorkerUpdate {
        WorkerUpdate::Refreshed(RefreshOutcome {
            kind,
            page: 1,
            stats: Some(Ok(StatsSnapshot::default())),
            proxies: Ok(ProxyPage {
                proxies: (0..n)
                    .map(|i| ProxyRecord::new(&format!("10.1.1.{}:80", i), 50.0, "now"))
                    .collect(),
                total: Some(n as u64),
            }),
            elapsed: Duration::ZERO,
        })
    }

    #[test]
    fn test_updates_drive_loading_and_refresh() {
        let mut state = state();
        let now = Instant::now();

        state.add_update(WorkerUpdate::Activity(Event::scheduler_with_level(
            "Polling".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        )));
        state.add_update(WorkerUpdate::Loading { page: 1 });
        state.update(now);
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(
            state.refresh_state(),
            RefreshState::Loading { started_at: now }
        );
        assert_eq!(state.dashboard.table().state(), &TableState::Loading);

        state.add_update(refreshed(RefreshKind::Full, 12));
        state.update(now);
        assert_eq!(state.refresh_state(), RefreshState::Idle);
        assert_eq!(state.dashboard.table().visible_count(), 12);
        assert_eq!(state.seconds_until_refresh(now), Some(30));
    }

    #[test]
    fn test_search_is_debounced() {
        let mut state = state();
        let start = Instant::now();
        state.add_update(refreshed(RefreshKind::Full, 12));
        state.update(start);

        state.set_search_input("10.1.1.1".to_string(), start);
        state.update(start + Duration::from_millis(100));
        assert_eq!(state.dashboard.table().visible_count(), 12);

        state.set_search_input("10.1.1.11".to_string(), start + Duration::from_millis(200));
        state.update(start + Duration::from_millis(400));
        assert_eq!(state.dashboard.table().visible_count(), 12);

        state.update(start + Duration::from_millis(500));
        assert_eq!(state.dashboard.table().visible_count(), 1);
        assert!(state.take_commands().is_empty());
    }

    #[test]
    fn test_clearing_search_reloads_page() {
        let mut state = state();
        let now = Instant::now();
        state.add_update(refreshed(RefreshKind::Full, 5));
        state.update(now);

        state.run_filter("10.1.1.3");
        assert_eq!(state.dashboard.table().visible_count(), 1);

        state.run_filter("");
        assert_eq!(state.take_commands(), vec![RefreshCommand::ReloadProxies]);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..150 {
            state.add_to_activity_log(Event::proxies_with_level(
                format!("event {}", i),
                EventType::Success,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), 100);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 50");
    }
}
