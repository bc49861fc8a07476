//! Dashboard statistics panel
//!
//! Renders the four pool statistics side by side

use super::super::state::DashboardState;
use crate::consts::dashboard_consts::UNKNOWN_STATUS;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let stats = state.dashboard.stats();
    let status_color = match stats.status.as_str() {
        UNKNOWN_STATUS | "-" => Color::Gray,
        _ => Color::LightGreen,
    };
    let cards = [
        ("PROXIES", stats.proxy_count.as_str(), Color::White),
        ("CRAWLERS", stats.crawler_count.as_str(), Color::White),
        ("STATUS", stats.status.as_str(), status_color),
        ("AVG SCORE", stats.avg_score.as_str(), Color::LightYellow),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(value.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(card, *chunk);
    }
}
