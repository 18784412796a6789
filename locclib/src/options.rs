//! Input options for a directory scan.

/// Options controlling how the directory tree is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into symlinked directories.
    ///
    /// Off by default: a symlinked directory is neither descended nor
    /// counted. When enabled, the walker detects cycles and skips them.
    pub follow_links: bool,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether symlinked directories are followed.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }
}
