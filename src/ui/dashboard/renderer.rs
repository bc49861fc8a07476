//! Dashboard main renderer

use super::components::{
    footer, header, logs, pagination, proxy_table, search, stats_panel, toasts,
};
use super::state::DashboardState;
use crate::consts::dashboard_consts::layout::{MIN_HEIGHT, MIN_WIDTH};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let area = f.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        log::trace!(
            "Terminal {}x{} below {}x{}, dashboard not drawn",
            area.width,
            area.height,
            MIN_WIDTH,
            MIN_HEIGHT
        );
        render_too_small(f, area);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Percentage(22),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    header::render_header(f, main_chunks[0], state);
    stats_panel::render_stats_panel(f, main_chunks[1], state);
    search::render_search_bar(f, main_chunks[2], state);
    proxy_table::render_proxy_table(f, main_chunks[3], state);
    pagination::render_pagination(f, main_chunks[4], state);
    logs::render_logs_panel(f, main_chunks[5], state);
    footer::render_footer(f, main_chunks[6], state.input_mode());
    toasts::render_toasts(f, area, state.dashboard.notifier());
}

fn render_too_small(f: &mut Frame, area: Rect) {
    let notice = Paragraph::new(format!(
        "Terminal too small ({}x{}). Resize to at least {}x{} or press Q to quit.",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Yellow))
    .wrap(Wrap { trim: true });
    f.render_widget(notice, area);
}
