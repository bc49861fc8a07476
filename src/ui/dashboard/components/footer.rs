//! Dashboard footer component
//!
//! Renders key bindings for the current input mode

use super::super::state::InputMode;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, mode: InputMode) {
    let footer_text = match mode {
        InputMode::Normal => {
            "[Q] Quit | [R] Refresh | [/] Search | [E] Export | [C] Copy | [←/→] Page | [↑/↓] Select"
        }
        InputMode::Search => "[Enter] Apply | [Esc] Close | [Ctrl+U] Clear | Paste to search",
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
