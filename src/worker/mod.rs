//! Scraping fan-out and delivery of the deferred reply

pub mod deliver;
pub mod handler;
pub mod summarize;

pub use handler::{SummaryService, spawn_summary};
