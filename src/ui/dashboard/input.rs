//! Keyboard and paste handling for the dashboard screen

use super::state::{DashboardState, InputMode};
use crate::utils::clipboard::Clipboard;
use crate::workers::refresher::RefreshCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

impl DashboardState {
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> KeyAction {
        match self.input_mode() {
            InputMode::Normal => self.handle_normal_key(key, clipboard),
            InputMode::Search => {
                self.handle_search_key(key, now);
                KeyAction::Continue
            }
        }
    }

    /// Bracketed paste goes into the search box.
    pub fn handle_paste(&mut self, text: &str, now: Instant) {
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        let mut query = self.search_input().to_string();
        query.push_str(pasted.trim());
        self.set_input_mode(InputMode::Search);
        self.set_search_input(query, now);
    }

    fn handle_normal_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) -> KeyAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Char('r') => {
                self.dashboard.notifier_mut().info("Refreshing...");
                self.queue_command(RefreshCommand::Refresh);
            }
            KeyCode::Char('/') => self.set_input_mode(InputMode::Search),
            KeyCode::Char('e') => {
                self.dashboard.export_proxies();
            }
            KeyCode::Char('c') | KeyCode::Enter => {
                self.dashboard.copy_selected(clipboard);
            }
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.table_mut().select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.table_mut().select_previous(),
            KeyCode::Left | KeyCode::Char('h') => {
                let target = self.dashboard.previous_page();
                self.change_page(target);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let target = self.dashboard.next_page();
                self.change_page(target);
            }
            KeyCode::Home => {
                let target = (self.dashboard.pagination().current_page() > 1).then_some(1);
                self.change_page(target);
            }
            KeyCode::End => {
                let target = self.dashboard.last_page();
                self.change_page(target);
            }
            _ => {}
        }
        KeyAction::Continue
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        let mut query = self.search_input().to_string();
        match key.code {
            KeyCode::Esc => {
                self.set_input_mode(InputMode::Normal);
                return;
            }
            KeyCode::Enter => {
                self.set_input_mode(InputMode::Normal);
                if let Some(keyword) = self.search_debouncer_mut().flush() {
                    self.run_filter(&keyword);
                }
                return;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => query.clear(),
            KeyCode::Char(c) => query.push(c),
            KeyCode::Backspace => {
                if query.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }
        self.set_search_input(query, now);
    }

    /// Disabled links and the current page do nothing.
    fn change_page(&mut self, target: Option<u32>) {
        let Some(page) = target else {
            return;
        };
        if page != self.dashboard.pagination().current_page()
            && self.dashboard.go_to_page(page as i64)
        {
            self.queue_command(RefreshCommand::GoToPage(page));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ProxyPage, ProxyRecord, StatsSnapshot};
    use crate::environment::Environment;
    use crate::events::WorkerUpdate;
    use crate::ui::app::UIConfig;
    use crate::utils::clipboard::ClipboardError;
    use crate::workers::fetcher::{RefreshKind, RefreshOutcome};
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingClipboard(Vec<String>);

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_state(total: u64) -> DashboardState {
        let mut state = DashboardState::new(Environment::Local, UIConfig::default());
        state.add_update(WorkerUpdate::Refreshed(RefreshOutcome {
            kind: RefreshKind::Full,
            page: 1,
            stats: Some(Ok(StatsSnapshot::default())),
            proxies: Ok(ProxyPage {
                proxies: (0..20)
                    .map(|i| ProxyRecord::new(&format!("10.2.0.{}:1080", i), 90.0, "now"))
                    .collect(),
                total: Some(total),
            }),
            elapsed: Duration::ZERO,
        }));
        state.update(Instant::now());
        state
    }

    #[test]
    fn test_quit_and_refresh_keys() {
        let mut state = loaded_state(20);
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        assert_eq!(
            state.handle_key(key(KeyCode::Char('r')), &mut clipboard, now),
            KeyAction::Continue
        );
        assert_eq!(state.take_commands(), vec![RefreshCommand::Refresh]);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), &mut clipboard, now),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_page_keys_respect_disabled_links() {
        let mut state = loaded_state(45);
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        state.handle_key(key(KeyCode::Left), &mut clipboard, now);
        assert!(state.take_commands().is_empty());

        state.handle_key(key(KeyCode::Right), &mut clipboard, now);
        assert_eq!(state.take_commands(), vec![RefreshCommand::GoToPage(2)]);

        state.handle_key(key(KeyCode::End), &mut clipboard, now);
        assert_eq!(state.take_commands(), vec![RefreshCommand::GoToPage(3)]);

        state.handle_key(key(KeyCode::Home), &mut clipboard, now);
        assert_eq!(state.take_commands(), vec![RefreshCommand::GoToPage(1)]);
    }

    #[test]
    fn test_search_mode_editing() {
        let mut state = loaded_state(20);
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        state.handle_key(key(KeyCode::Char('/')), &mut clipboard, now);
        assert_eq!(state.input_mode(), InputMode::Search);
        for c in "10.2.0.77".chars() {
            state.handle_key(key(KeyCode::Char(c)), &mut clipboard, now);
        }
        state.handle_key(key(KeyCode::Backspace), &mut clipboard, now);
        state.handle_key(key(KeyCode::Backspace), &mut clipboard, now);
        state.handle_key(key(KeyCode::Char('5')), &mut clipboard, now);
        assert_eq!(state.search_input(), "10.2.0.5");
        assert!(state.search_pending());

        // 'q' is text while searching
        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), &mut clipboard, now),
            KeyAction::Continue
        );
        state.handle_key(key(KeyCode::Backspace), &mut clipboard, now);

        state.handle_key(key(KeyCode::Enter), &mut clipboard, now);
        assert_eq!(state.input_mode(), InputMode::Normal);
        assert_eq!(state.dashboard.table().visible_count(), 1);
        assert!(!state.search_pending());
    }

    #[test]
    fn test_ctrl_u_clears_search() {
        let mut state = loaded_state(20);
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();
        state.set_input_mode(InputMode::Search);
        state.set_search_input("10.2".to_string(), now);

        state.handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut clipboard,
            now,
        );
        assert_eq!(state.search_input(), "");
    }

    #[test]
    fn test_paste_appends_to_search() {
        let mut state = loaded_state(20);
        let now = Instant::now();
        state.handle_paste("10.2.0.1\n", now);
        assert_eq!(state.input_mode(), InputMode::Search);
        assert_eq!(state.search_input(), "10.2.0.1");

        state.update(now + Duration::from_millis(300));
        // 10.2.0.1 and 10.2.0.10 through 10.2.0.19
        assert_eq!(state.dashboard.table().visible_count(), 11);
    }

    #[test]
    fn test_copy_selected_row() {
        let mut state = loaded_state(20);
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        state.handle_key(key(KeyCode::Down), &mut clipboard, now);
        state.handle_key(key(KeyCode::Char('c')), &mut clipboard, now);
        assert_eq!(clipboard.0, vec!["10.2.0.1:1080".to_string()]);
    }
}
