//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::dashboard::table::ScoreTier;
use crate::events::Worker;
use crate::utils::notify::ToastLevel;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::StatsLoader => Color::Cyan,
        Worker::ProxyLoader => Color::Green,
        Worker::Scheduler => Color::Yellow,
    }
}

/// Badge color of a score tier
pub fn get_tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Excellent => Color::Green,
        ScoreTier::Good => Color::Cyan,
        ScoreTier::Fair => Color::Yellow,
        ScoreTier::Poor => Color::Red,
    }
}

pub fn get_toast_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Success => Color::Green,
        ToastLevel::Error => Color::Red,
        ToastLevel::Warning => Color::Yellow,
        ToastLevel::Info => Color::Cyan,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD and HH:MM:SS from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(clock)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, clock);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose reqwest error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("connect") {
        return "Cannot reach the ProxyPool API".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2024-03-09 14:05:59"),
            "03-09 14:05:59"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Failed to load stats: Reqwest error: error sending request: connect refused"
            ),
            "Cannot reach the ProxyPool API"
        );
        assert_eq!(
            clean_http_error_message("Failed to load proxies: HTTP error with status 500: boom"),
            "Failed to load proxies: HTTP error with status 500: boom"
        );
    }
}
