//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod logs;
pub mod pagination;
pub mod proxy_table;
pub mod search;
pub mod stats_panel;
pub mod toasts;
