//! Dashboard header component
//!
//! Renders the title and the refresh gauge

use super::super::state::{DashboardState, RefreshState};
use crate::utils::format::{format_date, format_time};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use std::time::Instant;

/// Render header with title, backend address and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let (host, port) = state.environment.host_and_port();
    let title_text = format!(
        "PROXYPOOL DASHBOARD v{}  ·  {}:{}",
        env!("CARGO_PKG_VERSION"),
        host,
        port
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let last_refresh = state
        .dashboard
        .last_refresh()
        .map(|at| format_date(&at, "HH:mm:ss"))
        .unwrap_or_else(|| "never".to_string());

    let (progress_text, gauge_color, progress_percent) = match state.refresh_state() {
        RefreshState::Loading { .. } => {
            // Animated gauge while a request is in flight
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!(
                    "LOADING - Page {}",
                    state.dashboard.pagination().current_page()
                ),
                Color::LightGreen,
                progress,
            )
        }
        RefreshState::Idle => match state.seconds_until_refresh(Instant::now()) {
            Some(remaining) => {
                let interval = state.refresh_interval.as_secs().max(1);
                let elapsed = interval.saturating_sub(remaining);
                let progress = ((elapsed as f64 / interval as f64) * 100.0) as u16;
                (
                    format!(
                        "NEXT REFRESH IN {} - Last refresh {}",
                        format_time(remaining),
                        last_refresh
                    ),
                    Color::LightBlue,
                    progress.min(100),
                )
            }
            None => ("WAITING - Connecting".to_string(), Color::LightBlue, 0),
        },
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
