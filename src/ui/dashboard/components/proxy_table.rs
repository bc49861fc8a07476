//! Dashboard proxy table
//!
//! Renders the current page, or a single placeholder row while loading,
//! when the page is empty and when the request failed

use super::super::state::DashboardState;
use super::super::utils::get_tier_color;
use crate::dashboard::table::TableState;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub fn render_proxy_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let table_model = state.dashboard.table();
    let header = Row::new(["#", "PROXY", "SCORE", "LAST CHECKED"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = Vec::with_capacity(table_model.rendered_row_count());
    match table_model.state() {
        TableState::Loading => rows.push(placeholder_row("Loading...", Color::Gray)),
        TableState::Empty => rows.push(placeholder_row("No data", Color::Gray)),
        TableState::Error(message) => rows.push(placeholder_row(message, Color::Red)),
        TableState::Loaded(_) => {
            for row in table_model.visible_rows() {
                let proxy_style = if row.well_formed {
                    Style::default().fg(Color::White)
                } else {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC)
                };
                rows.push(Row::new(vec![
                    Cell::from(row.number.to_string()).style(Style::default().fg(Color::DarkGray)),
                    Cell::from(row.proxy().to_string()).style(proxy_style),
                    Cell::from(format!(" {} ", row.score_label())).style(
                        Style::default()
                            .fg(Color::Black)
                            .bg(get_tier_color(row.tier))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::from(row.record.last_checked().to_string())
                        .style(Style::default().fg(Color::Gray)),
                ]));
            }
        }
    }

    let title = format!(
        "PROXIES - Page {}",
        state.dashboard.pagination().current_page()
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(22),
            Constraint::Length(8),
            Constraint::Min(19),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .bg(Color::Rgb(40, 48, 56))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ")
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    let mut selection = ratatui::widgets::TableState::default();
    if matches!(table_model.state(), TableState::Loaded(_)) && table_model.visible_count() > 0 {
        selection.select(Some(table_model.selected()));
    }
    f.render_stateful_widget(table, area, &mut selection);
}

fn placeholder_row(text: &str, color: Color) -> Row<'static> {
    Row::new(vec![
        Cell::from(""),
        Cell::from(text.to_string()).style(Style::default().fg(color)),
    ])
}
