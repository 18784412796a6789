//! Output formatting: present scan results as a text report.
//!
//! This module handles the last stage of the pipeline - turning a finished
//! [`ScanResult`](crate::ScanResult) into display strings. It provides:
//!
//! - **ReportTable**: Header block, language rows and summary line
//! - **format_thousands**: Comma grouping for the grand total
//!
//! ## Example
//!
//! ```rust,ignore
//! use locclib::output::ReportTable;
//!
//! let table = ReportTable::from_scan(&result);
//! print!("{}", table.render());
//! ```

pub mod table;

pub use table::{format_thousands, render_report, ReportTable, TableRow};
