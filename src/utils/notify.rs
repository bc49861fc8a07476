//! Toast notifications

use crate::consts::dashboard_consts::toast;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
    /// Zero keeps the toast until it is dismissed.
    pub ttl: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        !self.ttl.is_zero() && now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// Queue of toasts currently on screen. Every toast is logged as well.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, level: ToastLevel, message: impl Into<String>, ttl: Duration) {
        let message = message.into();
        match level {
            ToastLevel::Error => log::error!("{}", message),
            ToastLevel::Warning => log::warn!("{}", message),
            ToastLevel::Success | ToastLevel::Info => log::info!("{}", message),
        }
        self.toasts.push_back(Toast {
            level,
            message,
            created_at: Instant::now(),
            ttl,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastLevel::Success, message, toast::default_ttl());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastLevel::Error, message, toast::error_ttl());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(ToastLevel::Warning, message, toast::default_ttl());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(ToastLevel::Info, message, toast::default_ttl());
    }

    /// Drops expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    /// The newest toasts, oldest first, capped at what fits on screen.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        let skip = self.toasts.len().saturating_sub(toast::MAX_VISIBLE);
        self.toasts.iter().skip(skip)
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
