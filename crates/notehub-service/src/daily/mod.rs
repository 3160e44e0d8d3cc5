//! Daily-note service.

pub mod service;

pub use service::{DailyConfig, DailyService};
