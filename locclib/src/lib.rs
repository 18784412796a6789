//! # locclib
//!
//! A lines of code counter library that groups files by language.
//!
//! ## Overview
//!
//! Files are classified purely by extension against a fixed language table,
//! every line of a classified file is counted (no comment or blank-line
//! detection), and the totals are aggregated per language. The pipeline has
//! three stages:
//!
//! - **Source**: walk the tree and classify each file (`source`)
//! - **Data**: count lines and aggregate them into a `ScanResult` (`data`)
//! - **Output**: format the result as a fixed-width report (`output`)
//!
//! Files that cannot be read are still counted as files of their language,
//! contributing zero lines. Only an invalid scan root is an error.
//!
//! ## Example
//!
//! ```rust
//! use locclib::{render_report, scan_directory, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.py"), "x = 1\ny = 2\nprint(x + y)\n").unwrap();
//! fs::write(dir.path().join("b.py"), "").unwrap();
//! fs::write(dir.path().join("image.png"), [0u8; 4]).unwrap();
//!
//! let result = scan_directory(dir.path(), &ScanOptions::new()).unwrap();
//! assert_eq!(result.total_files, 3);
//! assert_eq!(result.unique_files(), 2);
//! assert_eq!(result.line_count("Python"), Some(3));
//!
//! let report = render_report(&result);
//! assert!(report.contains("SUM: 2 files | 3 total lines of code"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    count_lines, count_lines_in, scan_directory, LanguageRow, LanguageStats, ScanResult,
    ScanSummary,
};
pub use error::LoccError;
pub use options::ScanOptions;
pub use output::{format_thousands, render_report, ReportTable, TableRow};
pub use source::{
    classify, discover_files, is_code_file, language_of, normalized_extension, validate_root,
    BINARY_EXTENSIONS, LANGUAGES,
};

/// Result type for locclib operations
pub type Result<T> = std::result::Result<T, LoccError>;
