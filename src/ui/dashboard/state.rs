//! Dashboard state management
//!
//! Contains the UI-side dashboard state wrapped around the view-model

use crate::consts::dashboard_consts::{MAX_ACTIVITY_LOGS, input};
use crate::dashboard::Dashboard;
use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, WorkerUpdate};
use crate::ui::app::UIConfig;
use crate::utils::debounce::Debouncer;
use crate::workers::refresher::RefreshCommand;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Keyboard focus of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate the table.
    Normal,
    /// Keys edit the search box.
    Search,
}

/// Where the refresh cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Loading { started_at: Instant },
}

#[derive(Debug)]
pub struct DashboardState {
    /// The view-model: stats, table, pagination, toasts.
    pub dashboard: Dashboard,
    /// The backend being polled.
    pub environment: Environment,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Queue of worker updates waiting to be processed
    pub pending_updates: VecDeque<WorkerUpdate>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Interval of the automatic refresh
    pub refresh_interval: Duration,
    /// Animation tick counter
    pub tick: usize,

    input_mode: InputMode,
    search_input: String,
    search_debouncer: Debouncer<String>,
    refresh_state: RefreshState,
    /// When the next automatic refresh is due
    next_refresh_at: Option<Instant>,
    /// Commands for the refresh worker, drained by the UI loop
    outgoing_commands: Vec<RefreshCommand>,
}

impl DashboardState {
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            dashboard: Dashboard::new(ui_config.page_size, ui_config.export_dir),
            environment,
            activity_logs: VecDeque::new(),
            pending_updates: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            refresh_interval: ui_config.refresh_interval,
            tick: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            search_debouncer: Debouncer::new(input::search_debounce()),
            refresh_state: RefreshState::Idle,
            next_refresh_at: None,
            outgoing_commands: Vec::new(),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.refresh_state
    }

    pub fn set_refresh_state(&mut self, state: RefreshState) {
        self.refresh_state = state;
    }

    pub fn set_next_refresh_at(&mut self, at: Option<Instant>) {
        self.next_refresh_at = at;
    }

    /// Seconds until the next automatic refresh.
    pub fn seconds_until_refresh(&self, now: Instant) -> Option<u64> {
        self.next_refresh_at
            .map(|at| at.saturating_duration_since(now).as_secs())
    }

    pub fn search_debouncer_mut(&mut self) -> &mut Debouncer<String> {
        &mut self.search_debouncer
    }

    pub fn search_pending(&self) -> bool {
        self.search_debouncer.is_pending()
    }

    /// Replaces the search text and re-arms the debounce timer.
    pub fn set_search_input(&mut self, text: String, now: Instant) {
        self.search_input = text.clone();
        self.search_debouncer.arm(text, now);
    }

    pub fn queue_command(&mut self, command: RefreshCommand) {
        self.outgoing_commands.push(command);
    }

    pub fn take_commands(&mut self) -> Vec<RefreshCommand> {
        std::mem::take(&mut self.outgoing_commands)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add a worker update to the processing queue
    pub fn add_update(&mut self, update: WorkerUpdate) {
        self.pending_updates.push_back(update);
    }
}
