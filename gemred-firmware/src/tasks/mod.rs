//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod gauge;
pub mod report;

pub use gauge::gauge_task;
pub use report::report_task;
