//! Dashboard pagination bar

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Renders prev/next links around a window of page numbers.
///
/// Nothing is drawn when all records fit on one page.
pub fn render_pagination(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(view) = state.dashboard.pagination_view() else {
        return;
    };

    let link_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut spans = vec![Span::styled("« Prev ", link_style(view.prev.enabled))];
    for item in &view.pages {
        if item.active {
            spans.push(Span::styled(
                format!("[{}]", item.page),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", item.page),
                Style::default().fg(Color::White),
            ));
        }
    }
    spans.push(Span::styled(" Next »", link_style(view.next.enabled)));
    spans.push(Span::styled(
        format!(
            "   {} pages · {} proxies",
            view.total_pages,
            state.dashboard.total()
        ),
        Style::default().fg(Color::Gray),
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
