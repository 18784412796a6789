//! High-level scanning API.
//!
//! This module provides the main entry points for counting lines of code
//! per language in a directory tree, and the line counter itself.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::LoccError;
use crate::options::ScanOptions;
use crate::source::language::classify;
use crate::source::walk::discover_files;
use crate::Result;

use super::stats::ScanResult;

/// Tracks whether the bytes after the last line terminator decode to text.
///
/// Invalid UTF-8 is dropped, so a tail made only of invalid bytes is not a
/// line. `pending` holds undecided bytes, trimmed to the longest possible
/// incomplete sequence.
#[derive(Default)]
struct TrailingLine {
    pending: Vec<u8>,
    has_text: bool,
}

impl TrailingLine {
    const MAX_INCOMPLETE: usize = 3;

    fn reset(&mut self) {
        self.pending.clear();
        self.has_text = false;
    }

    fn push(&mut self, bytes: &[u8]) {
        if self.has_text || bytes.is_empty() {
            return;
        }
        self.pending.extend_from_slice(bytes);
        if self.pending.utf8_chunks().any(|c| !c.valid().is_empty()) {
            self.has_text = true;
            self.pending.clear();
        } else if self.pending.len() > Self::MAX_INCOMPLETE {
            let excess = self.pending.len() - Self::MAX_INCOMPLETE;
            self.pending.drain(..excess);
        }
    }
}

/// Count the lines in a byte stream.
///
/// `\n`, `\r\n` and a lone `\r` each end one line, and a final line without
/// a terminator still counts if anything in it decodes as UTF-8. Invalid
/// byte sequences are dropped rather than failing the count.
///
/// # Example
///
/// ```rust
/// use locclib::count_lines_in;
///
/// assert_eq!(count_lines_in(&b""[..]).unwrap(), 0);
/// assert_eq!(count_lines_in(&b"one\ntwo\n"[..]).unwrap(), 2);
/// assert_eq!(count_lines_in(&b"one\r\ntwo"[..]).unwrap(), 2);
/// assert_eq!(count_lines_in(&b"one\n\xff"[..]).unwrap(), 1);
/// ```
pub fn count_lines_in<R: Read>(reader: R) -> std::io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut lines = 0u64;
    let mut prev_cr = false;
    let mut trailing = TrailingLine::default();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let lf = bytecount::count(buf, b'\n');
        let cr = bytecount::count(buf, b'\r');
        let mut crlf = buf.windows(2).filter(|w| *w == b"\r\n".as_slice()).count();
        // a CRLF split across two reads
        if prev_cr && buf[0] == b'\n' {
            crlf += 1;
        }
        lines += (lf + cr - crlf) as u64;

        match buf.iter().rposition(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                trailing.reset();
                trailing.push(&buf[end + 1..]);
            }
            None => trailing.push(buf),
        }
        prev_cr = buf[buf.len() - 1] == b'\r';

        let len = buf.len();
        reader.consume(len);
    }

    if trailing.has_text {
        lines += 1;
    }

    Ok(lines)
}

/// Count the lines in a single file.
///
/// The file is closed before this returns, on success and on error.
pub fn count_lines(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoccError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    count_lines_in(file).map_err(|source| LoccError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Classify one visited file and fold it into `result`.
fn record_file(result: &mut ScanResult, path: PathBuf) {
    let Some(language) = classify(&path) else {
        tracing::trace!(path = %path.display(), "ignored");
        result.record_ignored();
        return;
    };

    // An unreadable file stays classified and contributes zero lines. This
    // under-reports silently; the failure is only visible in debug logs.
    let lines = match count_lines(&path) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::debug!(error = %err, "counting as zero lines");
            0
        }
    };

    tracing::trace!(path = %path.display(), language, lines, "counted");
    result.record_counted(path, language, lines);
}

/// Scan a directory tree and aggregate files and lines per language.
///
/// Fails only when `root` does not exist, is not a directory, or cannot be
/// listed; problems with individual files never abort the scan.
///
/// # Example
///
/// ```rust
/// use locclib::{scan_directory, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.py"), "import os\nprint(os.sep)\n").unwrap();
/// fs::write(dir.path().join("notes.md"), "# Notes\n").unwrap();
///
/// let result = scan_directory(dir.path(), &ScanOptions::new()).unwrap();
/// assert_eq!(result.total_files, 2);
/// assert_eq!(result.ignored_files, 1);
/// assert_eq!(result.line_count("Python"), Some(2));
/// ```
pub fn scan_directory(root: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanResult> {
    let root = root.as_ref();
    let files = discover_files(root, options)?;

    let mut result = ScanResult::new();
    for path in files {
        record_file(&mut result, path);
    }

    tracing::info!(
        root = %root.display(),
        files = result.total_files,
        ignored = result.ignored_files,
        lines = result.total_lines(),
        "scan complete"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Reader that hands out one byte per read, to split terminators.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_count_lines_terminators() {
        assert_eq!(count_lines_in(&b""[..]).unwrap(), 0);
        assert_eq!(count_lines_in(&b"\n"[..]).unwrap(), 1);
        assert_eq!(count_lines_in(&b"a"[..]).unwrap(), 1);
        assert_eq!(count_lines_in(&b"a\nb"[..]).unwrap(), 2);
        assert_eq!(count_lines_in(&b"a\nb\n"[..]).unwrap(), 2);
        assert_eq!(count_lines_in(&b"\n\n\n"[..]).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_carriage_returns() {
        assert_eq!(count_lines_in(&b"a\r\nb\r\n"[..]).unwrap(), 2);
        assert_eq!(count_lines_in(&b"a\rb\r"[..]).unwrap(), 2);
        assert_eq!(count_lines_in(&b"a\r\rb"[..]).unwrap(), 3);
        assert_eq!(count_lines_in(&b"a\n\rb"[..]).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_across_reads() {
        let data = b"one\r\ntwo\rthree\nfour";
        assert_eq!(count_lines_in(Trickle(data)).unwrap(), 4);
        assert_eq!(count_lines_in(Trickle(b"x\r\n")).unwrap(), 1);
    }

    #[test]
    fn test_count_lines_invalid_utf8() {
        let data = b"ok\n\xff\xfe broken\n\xc3\n";
        assert_eq!(count_lines_in(&data[..]).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_invalid_tail_is_not_a_line() {
        assert_eq!(count_lines_in(&b"a\n\xff"[..]).unwrap(), 1);
        assert_eq!(count_lines_in(&b"\xff\xfe"[..]).unwrap(), 0);
        assert_eq!(count_lines_in(&b"a\r\n\xc3"[..]).unwrap(), 1);
        assert_eq!(count_lines_in(&b"a\n\xffb"[..]).unwrap(), 2);
        assert_eq!(count_lines_in(Trickle(b"a\n\xff\xfe\xfd\xfc")).unwrap(), 1);
    }

    #[test]
    fn test_count_lines_char_split_across_reads() {
        // U+00E9 and U+1F600, one byte per read
        assert_eq!(count_lines_in(Trickle(b"a\n\xc3\xa9")).unwrap(), 2);
        assert_eq!(count_lines_in(Trickle(b"\xff\xf0\x9f\x98\x80")).unwrap(), 1);
    }

    #[test]
    fn test_count_lines_missing_file() {
        let temp = tempdir().unwrap();
        let result = count_lines(temp.path().join("missing.py"));

        assert!(matches!(result, Err(LoccError::FileRead { .. })));
    }

    #[test]
    fn test_scan_end_to_end() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("a.py"), b"import sys\n\nprint(sys.argv)\n");
        create_file(&temp.path().join("b.py"), b"");
        create_file(&temp.path().join("image.png"), &[0x89, b'P', b'N', b'G']);
        create_file(&temp.path().join("readme.unknownext"), b"hello\n");

        let result = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(result.total_files, 4);
        assert_eq!(result.ignored_files, 2);
        assert_eq!(result.unique_files(), 2);
        assert_eq!(result.file_count("Python"), Some(2));
        assert_eq!(result.line_count("Python"), Some(3));
        assert_eq!(result.total_lines(), 3);
        assert_eq!(result.languages.len(), 1);
    }

    #[test]
    fn test_scan_empty_file_counts_as_file() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("empty.json"), b"");

        let result = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(result.file_count("JSON"), Some(1));
        assert_eq!(result.line_count("JSON"), Some(0));
        assert_eq!(result.ignored_files, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_file_degrades_to_zero() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("ok.sh"), b"echo hi\n");
        std::os::unix::fs::symlink(temp.path().join("nowhere.sh"), temp.path().join("broken.sh"))
            .unwrap();

        let result = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(result.total_files, 2);
        assert_eq!(result.ignored_files, 0);
        assert_eq!(result.file_count("Shell Script"), Some(2));
        assert_eq!(result.line_count("Shell Script"), Some(1));
    }

    #[test]
    fn test_scan_nested_languages() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("web/index.html"), b"<html>\n</html>\n");
        create_file(&temp.path().join("web/css/site.css"), b"a{}\n");
        create_file(&temp.path().join("web/js/app.js"), b"1\n2\n3\n4\n");
        create_file(&temp.path().join("include/x.h"), b"#pragma once\n");
        create_file(&temp.path().join("include/y.hpp"), b"#pragma once\n\n");
        create_file(&temp.path().join("Cargo.lock"), b"# lock\n");

        let result = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(result.total_files, 6);
        assert_eq!(result.ignored_files, 1);
        assert_eq!(result.line_count("HTML"), Some(2));
        assert_eq!(result.line_count("CSS"), Some(1));
        assert_eq!(result.line_count("JavaScript"), Some(4));
        assert_eq!(result.line_count("C Header"), Some(1));
        assert_eq!(result.line_count("C++ Header"), Some(2));
        assert_eq!(result.total_lines(), 10);
        assert_eq!(
            result.total_files,
            result.ignored_files + result.unique_files()
        );
    }

    #[test]
    fn test_scan_nonexistent_root() {
        let result = scan_directory("/nonexistent/path", &ScanOptions::new());

        assert!(matches!(result, Err(LoccError::PathNotFound(_))));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = tempdir().unwrap();

        let result = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(result, ScanResult::new());
    }
}
