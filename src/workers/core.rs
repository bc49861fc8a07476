//! Core worker utilities and traits

use crate::consts::dashboard_consts::{pagination, refresh};
use crate::environment::Environment;
use crate::events::{Event, EventType, WorkerUpdate};
use crate::logging::LogLevel;
use std::time::Duration;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<WorkerUpdate>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<WorkerUpdate>) -> Self {
        Self { sender }
    }

    /// Send an update. Returns false once the receiving side is gone.
    pub async fn send_update(&self, update: WorkerUpdate) -> bool {
        self.sender.send(update).await.is_ok()
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(WorkerUpdate::Activity(event)).await;
    }

    pub async fn send_stats_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::stats_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_proxy_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::proxies_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_scheduler_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::scheduler_with_level(message, event_type, log_level))
            .await;
    }
}

/// Worker configuration shared across all worker types
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub environment: Environment,
    pub page_size: u32,
    pub refresh_interval: Duration,
}

impl WorkerConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            page_size: pagination::PAGE_SIZE,
            refresh_interval: refresh::refresh_interval(),
        }
    }
}
