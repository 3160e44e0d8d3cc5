//! Daily-note view types.

pub mod model;

pub use model::{DailyList, DailyNote, DailyYear};
