//! Report export services.

mod export;

pub use export::{ReportError, ReportResult, ReportService};
