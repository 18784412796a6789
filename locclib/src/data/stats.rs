//! Aggregated scan statistics.
//!
//! A [`ScanResult`] is built by a single pass over the tree and holds, per
//! language, how many files were found and how many lines they contain,
//! alongside the run-wide file counters.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File and line counts for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Number of files classified as this language
    pub files: u64,
    /// Total lines across those files
    pub lines: u64,
}

/// One row of the ranked language listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRow {
    pub language: String,
    pub files: u64,
    pub lines: u64,
}

/// Result of scanning one directory tree.
///
/// A language appears in `languages` only once a file of that language has
/// been recorded, so per-language file and line counts always share the
/// same key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Every file visited
    pub total_files: u64,
    /// Files that were not classified as code
    pub ignored_files: u64,
    /// Distinct paths that were classified and counted
    pub counted_paths: BTreeSet<PathBuf>,
    /// Per-language counts
    pub languages: BTreeMap<String, LanguageStats>,
}

impl ScanResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited file that is not code.
    pub fn record_ignored(&mut self) {
        self.total_files += 1;
        self.ignored_files += 1;
    }

    /// Record a classified file and its line count.
    pub fn record_counted(&mut self, path: PathBuf, language: &str, lines: u64) {
        self.total_files += 1;
        self.counted_paths.insert(path);
        let stats = self.languages.entry(language.to_string()).or_default();
        stats.files += 1;
        stats.lines += lines;
    }

    /// Number of distinct files counted.
    pub fn unique_files(&self) -> u64 {
        self.counted_paths.len() as u64
    }

    /// Sum of lines across all languages.
    pub fn total_lines(&self) -> u64 {
        self.languages.values().map(|s| s.lines).sum()
    }

    /// Lines counted for a language, if any file of it was seen.
    pub fn line_count(&self, language: &str) -> Option<u64> {
        self.languages.get(language).map(|s| s.lines)
    }

    /// Files counted for a language, if any file of it was seen.
    pub fn file_count(&self, language: &str) -> Option<u64> {
        self.languages.get(language).map(|s| s.files)
    }

    /// Languages ordered by descending line count.
    ///
    /// Equal line counts fall back to ascending language name, so the order
    /// never depends on traversal order.
    pub fn ranked(&self) -> Vec<LanguageRow> {
        let mut rows: Vec<LanguageRow> = self
            .languages
            .iter()
            .map(|(language, stats)| LanguageRow {
                language: language.clone(),
                files: stats.files,
                lines: stats.lines,
            })
            .collect();
        // BTreeMap iteration is already name-ascending; a stable sort keeps it for ties.
        rows.sort_by(|a, b| b.lines.cmp(&a.lines));
        rows
    }
}

/// Serialized view of a [`ScanResult`], with languages in ranked order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_files: u64,
    pub unique_files: u64,
    pub ignored_files: u64,
    pub total_lines: u64,
    pub languages: Vec<LanguageRow>,
}

impl From<&ScanResult> for ScanSummary {
    fn from(result: &ScanResult) -> Self {
        Self {
            total_files: result.total_files,
            unique_files: result.unique_files(),
            ignored_files: result.ignored_files,
            total_lines: result.total_lines(),
            languages: result.ranked(),
        }
    }
}

impl Serialize for ScanResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ScanSummary::from(self).serialize(serializer)
    }
}
