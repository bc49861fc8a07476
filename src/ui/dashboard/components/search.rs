//! Dashboard search bar

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_search_bar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let editing = state.input_mode() == InputMode::Search;
    let border_color = if editing { Color::Yellow } else { Color::DarkGray };

    let mut spans = vec![Span::styled(
        state.search_input().to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if editing {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    } else if state.search_input().is_empty() {
        spans.push(Span::styled(
            "Press / to filter proxies",
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Filter status on the right-hand side of the text
    let status = if state.search_pending() {
        Some("filtering...".to_string())
    } else if !state.dashboard.keyword().is_empty() {
        Some(format!(
            "{} shown",
            state.dashboard.table().visible_count()
        ))
    } else {
        None
    };
    if let Some(status) = status {
        spans.push(Span::styled(
            format!("  ({})", status),
            Style::default().fg(Color::Gray),
        ));
    }

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("SEARCH")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(search, area);
}
