//! Dashboard view-model: stats panel, proxy table, pagination and the operations on them

mod controller;
pub mod pagination;
pub mod stats;
pub mod table;

pub use controller::Dashboard;
pub use table::FilterOutcome;
