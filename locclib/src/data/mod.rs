//! Data collection: count lines and aggregate statistics.
//!
//! This module handles the second stage of the pipeline - reading the
//! classified files and folding their line counts into a [`ScanResult`]. It
//! provides:
//!
//! - **Counting**: Tolerant line counting (`count_lines`, `count_lines_in`)
//! - **Scanning**: The single-pass traversal (`scan_directory`)
//! - **Statistics**: Per-language accumulators and the ranked view
//!
//! ## Example
//!
//! ```rust,ignore
//! use locclib::data::{scan_directory, ScanOptions};
//!
//! let result = scan_directory(".", &ScanOptions::new())?;
//! println!("Total lines: {}", result.total_lines());
//! ```

pub mod counter;
pub mod stats;

pub use counter::{count_lines, count_lines_in, scan_directory};
pub use stats::{LanguageRow, LanguageStats, ScanResult, ScanSummary};
