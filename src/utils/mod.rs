//! Stateless helpers shared by the dashboard, the UI and the CLI commands

pub mod clipboard;
pub mod debounce;
pub mod export;
pub mod format;
pub mod notify;
pub mod perf;
pub mod validate;
