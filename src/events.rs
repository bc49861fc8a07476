//! Event System
//!
//! Types and implementations for worker events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::workers::fetcher::RefreshOutcome;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Loads `/api/stats`.
    StatsLoader,
    /// Loads pages of `/api/proxies`.
    ProxyLoader,
    /// Drives the refresh timer and manual refresh requests.
    Scheduler,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn stats_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::StatsLoader, msg, event_type, log_level)
    }

    pub fn proxies_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::ProxyLoader, msg, event_type, log_level)
    }

    pub fn scheduler_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Scheduler, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Everything the refresh worker reports back to the UI.
#[derive(Debug)]
pub enum WorkerUpdate {
    /// A line for the activity log.
    Activity(Event),
    /// A proxy page request for `page` is about to start.
    Loading { page: u32 },
    /// A refresh finished, successfully or not.
    Refreshed(RefreshOutcome),
}
