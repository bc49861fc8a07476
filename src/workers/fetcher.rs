//! Stats and proxy-list loading for one refresh cycle

use super::core::EventSender;
use crate::api::error::ApiError;
use crate::api::{ProxyPage, ProxyPoolApi, StatsSnapshot};
use crate::dashboard::pagination::Pagination;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::utils::perf::PerfTimer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RefreshKind {
    /// Stats, then the current proxy page.
    Full,
    /// Only the current proxy page (page navigation, cleared filter).
    ProxiesOnly,
}

/// Result of one refresh cycle.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub kind: RefreshKind,
    /// Page the proxies were requested for.
    pub page: u32,
    /// `None` when stats were not requested.
    pub stats: Option<Result<StatsSnapshot, ApiError>>,
    pub proxies: Result<ProxyPage, ApiError>,
    pub elapsed: Duration,
}

/// Loads dashboard data and reports progress as activity events
pub struct DataFetcher {
    api: Box<dyn ProxyPoolApi>,
    error_handler: ErrorHandler,
    event_sender: EventSender,
}

impl DataFetcher {
    pub fn new(api: Box<dyn ProxyPoolApi>, event_sender: EventSender) -> Self {
        Self {
            api,
            error_handler: ErrorHandler::new(),
            event_sender,
        }
    }

    /// Fetch the pool statistics. Failures are reported, never fatal to the cycle.
    pub async fn load_stats(&self) -> Result<StatsSnapshot, ApiError> {
        match self.api.get_stats().await {
            Ok(stats) => {
                self.event_sender
                    .send_stats_event(
                        format!(
                            "Stats loaded: {} proxies, {} crawlers",
                            stats.proxy_count.unwrap_or(0),
                            stats.crawler_count.unwrap_or(0)
                        ),
                        EventType::Success,
                        LogLevel::Debug,
                    )
                    .await;
                Ok(stats)
            }
            Err(e) => {
                let log_level = self.error_handler.classify_error(&e);
                log::log!(log::Level::from(log_level), "Failed to load stats: {}", e);
                self.event_sender
                    .send_stats_event(
                        format!("Failed to load stats: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Fetch the page `pagination` points at.
    pub async fn load_proxies(&self, pagination: &Pagination) -> Result<ProxyPage, ApiError> {
        let page = pagination.current_page();
        match self
            .api
            .get_proxies(pagination.page_size(), pagination.offset())
            .await
        {
            Ok(proxies) => {
                let total_pages = pagination.total_pages(proxies.total()).max(1);
                self.event_sender
                    .send_proxy_event(
                        format!(
                            "Loaded {} proxies (page {} of {})",
                            proxies.proxies.len(),
                            page,
                            total_pages
                        ),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                Ok(proxies)
            }
            Err(e) => {
                let log_level = self.error_handler.classify_error(&e);
                log::log!(log::Level::from(log_level), "Failed to load proxies: {}", e);
                self.event_sender
                    .send_proxy_event(
                        format!("Failed to load proxies: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Full cycle: stats first, then the current proxy page.
    pub async fn load_dashboard_data(&self, pagination: &Pagination) -> RefreshOutcome {
        let timer = PerfTimer::start("Dashboard data load");
        let stats = self.load_stats().await;
        let proxies = self.load_proxies(pagination).await;
        RefreshOutcome {
            kind: RefreshKind::Full,
            page: pagination.current_page(),
            stats: Some(stats),
            proxies,
            elapsed: timer.finish(),
        }
    }

    pub async fn reload_proxies(&self, pagination: &Pagination) -> RefreshOutcome {
        let timer = PerfTimer::start("Proxy page load");
        let proxies = self.load_proxies(pagination).await;
        RefreshOutcome {
            kind: RefreshKind::ProxiesOnly,
            page: pagination.current_page(),
            stats: None,
            proxies,
            elapsed: timer.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockProxyPoolApi, ProxyRecord};
    use crate::events::WorkerUpdate;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use tokio::sync::mpsc;

    fn fetcher(api: MockProxyPoolApi) -> (DataFetcher, mpsc::Receiver<WorkerUpdate>) {
        let (tx, rx) = mpsc::channel(32);
        (DataFetcher::new(Box::new(api), EventSender::new(tx)), rx)
    }

    #[tokio::test]
    async fn test_stats_load_before_proxies() {
        let mut api = MockProxyPoolApi::new();
        let mut seq = Sequence::new();
        api.expect_get_stats()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(StatsSnapshot {
                    proxy_count: Some(45),
                    ..Default::default()
                })
            });
        api.expect_get_proxies()
            .with(eq(20u32), eq(20u64))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(ProxyPage {
                    proxies: vec![ProxyRecord::new("1.2.3.4:80", 90.0, "now")],
                    total: Some(45),
                })
            });

        let (fetcher, mut rx) = fetcher(api);
        let mut pagination = Pagination::new(20);
        pagination.go_to(2);

        let outcome = fetcher.load_dashboard_data(&pagination).await;
        assert_eq!(outcome.kind, RefreshKind::Full);
        assert_eq!(outcome.page, 2);
        assert_eq!(outcome.stats.unwrap().unwrap().proxy_count, Some(45));
        assert_eq!(outcome.proxies.unwrap().total(), 45);

        let mut messages = Vec::new();
        while let Ok(WorkerUpdate::Activity(event)) = rx.try_recv() {
            messages.push(event.msg);
        }
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], "Loaded 1 proxies (page 2 of 3)");
    }

    #[tokio::test]
    async fn test_stats_failure_does_not_stop_proxy_load() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats().times(1).returning(|| {
            Err(ApiError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        api.expect_get_proxies()
            .times(1)
            .returning(|_, _| Ok(ProxyPage::default()));

        let (fetcher, _rx) = fetcher(api);
        let outcome = fetcher.load_dashboard_data(&Pagination::new(20)).await;
        assert!(matches!(outcome.stats, Some(Err(ApiError::Http { status: 503, .. }))));
        assert!(outcome.proxies.is_ok());
    }

    #[tokio::test]
    async fn test_reload_proxies_skips_stats() {
        let mut api = MockProxyPoolApi::new();
        api.expect_get_stats().times(0);
        api.expect_get_proxies()
            .with(eq(20u32), eq(0u64))
            .times(1)
            .returning(|_, _| Err(ApiError::Malformed("no proxies".to_string())));

        let (fetcher, mut rx) = fetcher(api);
        let outcome = fetcher.reload_proxies(&Pagination::new(20)).await;
        assert_eq!(outcome.kind, RefreshKind::ProxiesOnly);
        assert!(outcome.stats.is_none());
        assert!(outcome.proxies.is_err());

        match rx.try_recv() {
            Ok(WorkerUpdate::Activity(event)) => {
                assert_eq!(event.event_type, EventType::Error);
                assert_eq!(event.log_level, LogLevel::Error);
            }
            other => panic!("unexpected update: {:?}", other),
        }
    }
}
