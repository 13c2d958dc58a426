//! Report export for Taskdesk.
//!
//! Reports flatten tasks and member workloads into rows with the columns of
//! the exported spreadsheets. Rendering the rows into a workbook is left to
//! the caller.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
