//! Toast overlay, stacked in the top-right corner

use super::super::utils::get_toast_color;
use crate::consts::dashboard_consts::layout::TOAST_WIDTH;
use crate::utils::notify::Notifier;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const TOAST_HEIGHT: u16 = 3;

pub fn render_toasts(f: &mut Frame, area: Rect, notifier: &Notifier) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in notifier.visible() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let color = get_toast_color(toast.level);
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let widget = Paragraph::new(toast.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(toast.level.to_string())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
        y += TOAST_HEIGHT;
    }
}
