//! Report row types.

mod rows;

pub use rows::{Report, TaskReportRow, UserReportRow};
