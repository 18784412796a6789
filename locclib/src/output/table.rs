//! Table-ready data structures for the language report.
//!
//! `ReportTable` is a pure presentation layer: it takes a finished
//! [`ScanResult`], formats every number into display strings, and renders
//! the fixed-width text report. It performs no I/O.
//!
//! The data flow is:
//! 1. Raw Data (ScanResult)
//! 2. Ranked rows (languages by descending line count)
//! 3. ReportTable (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::stats::ScanResult;

/// Width of every separator line.
const RULE_WIDTH: usize = 51;

const BANNER: &str = "--------------Created by: Susovan Garai------------";

const COLUMN_HEADER: &str = "  Language           Files     Lines of Code (LOC)";

/// Column widths for language rows, aligned under [`COLUMN_HEADER`].
const NAME_WIDTH: usize = 19;
const FILES_WIDTH: usize = 5;
const LINES_WIDTH: usize = 24;

/// A single language row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Language name
    pub label: String,
    /// File count, ready for display
    pub files: String,
    /// Line count, ready for display
    pub lines: String,
}

/// Table-ready report data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Header block lines ("N total files." etc.)
    pub header: Vec<String>,
    /// One row per language, most lines first
    pub rows: Vec<TableRow>,
    /// Summary line ("SUM: ...")
    pub footer: String,
}

impl ReportTable {
    /// Build the table from a completed scan.
    pub fn from_scan(result: &ScanResult) -> Self {
        let unique = result.unique_files();

        let header = vec![
            format!("{} total files.", result.total_files),
            format!("{} unique files.", unique),
            format!("{} files ignored.", result.ignored_files),
        ];

        let rows = result
            .ranked()
            .into_iter()
            .map(|row| TableRow {
                label: row.language,
                files: row.files.to_string(),
                lines: row.lines.to_string(),
            })
            .collect();

        let footer = format!(
            "SUM: {} files | {} total lines of code",
            unique,
            format_thousands(result.total_lines())
        );

        ReportTable {
            header,
            rows,
            footer,
        }
    }

    /// Render the full text report, one line per element, newline terminated.
    pub fn render(&self) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        let mut lines: Vec<String> = Vec::with_capacity(self.rows.len() + 12);

        lines.push(rule.clone());
        for line in &self.header {
            lines.push(format!("   {}", line));
        }
        lines.push(String::new());
        lines.push(BANNER.to_string());
        lines.push(rule.clone());
        lines.push(COLUMN_HEADER.to_string());
        lines.push(rule.clone());
        for row in &self.rows {
            lines.push(format_row(row));
        }
        lines.push(rule.clone());
        lines.push(self.footer.clone());
        lines.push(rule);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn format_row(row: &TableRow) -> String {
    format!(
        "  {:<name$}{:>files$}{:>lines$}",
        row.label,
        row.files,
        row.lines,
        name = NAME_WIDTH,
        files = FILES_WIDTH,
        lines = LINES_WIDTH
    )
}

/// Format a number with comma thousands separators.
///
/// ```rust
/// use locclib::format_thousands;
///
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Render the text report for a completed scan.
pub fn render_report(result: &ScanResult) -> String {
    ReportTable::from_scan(result).render()
}
