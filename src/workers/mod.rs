//! Background workers feeding the dashboard

pub mod core;
pub mod fetcher;
pub mod refresher;
