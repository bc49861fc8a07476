//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::dashboard_consts::{pagination, refresh};
use crate::environment::Environment;
use crate::events::WorkerUpdate;
use crate::ui::dashboard::{DashboardState, KeyAction, render_dashboard};
use crate::ui::splash::render_splash;
use crate::utils::clipboard::Clipboard;
use crate::workers::refresher::RefreshHandle;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub page_size: u32,
    pub refresh_interval: Duration,
    pub export_dir: PathBuf,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        page_size: u32,
        refresh_interval: Duration,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            with_background_color,
            page_size,
            refresh_interval,
            export_dir,
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self::new(
            true,
            pagination::PAGE_SIZE,
            refresh::refresh_interval(),
            PathBuf::from("."),
        )
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with stats and the proxy table.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Updates are applied while the splash is still showing.
    state: Box<DashboardState>,

    /// Receives updates from the refresh worker.
    update_receiver: mpsc::Receiver<WorkerUpdate>,

    /// Sends commands to the refresh worker and stops it.
    refresh_handle: RefreshHandle,

    /// Where copied proxies go.
    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        update_receiver: mpsc::Receiver<WorkerUpdate>,
        refresh_handle: RefreshHandle,
        clipboard: Box<dyn Clipboard>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: Box::new(DashboardState::new(environment, ui_config)),
            update_receiver,
            refresh_handle,
            clipboard,
        }
    }

    /// Stops the refresh worker and waits for it to exit.
    pub async fn shutdown(self) {
        self.refresh_handle.shutdown().await;
    }

    /// Drains worker updates, advances timers and forwards queued commands.
    fn tick(&mut self, now: Instant) {
        while let Ok(update) = self.update_receiver.try_recv() {
            self.state.add_update(update);
        }
        self.state.update(now);
        for command in self.state.take_commands() {
            self.refresh_handle.send(command);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| render(f, app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for terminal events
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                // Ctrl+C always exits; raw mode swallows the signal
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                match app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.current_screen = Screen::Dashboard;
                    }
                    Screen::Dashboard => {
                        let action =
                            app.state
                                .handle_key(key, app.clipboard.as_mut(), Instant::now());
                        if action == KeyAction::Quit {
                            return Ok(());
                        }
                    }
                }
            }
            Event::Paste(text) => {
                if app.current_screen == Screen::Dashboard {
                    app.state.handle_paste(&text, Instant::now());
                }
            }
            _ => {}
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}
