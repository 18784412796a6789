//! File discovery by recursive directory descent.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::LoccError;
use crate::options::ScanOptions;
use crate::Result;

/// Check that a scan root exists, is a directory, and can be listed.
pub fn validate_root(root: &Path) -> Result<()> {
    let dir_read = |source| LoccError::DirRead {
        path: root.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(root).map_err(|err| match err.kind() {
        ErrorKind::NotFound => LoccError::PathNotFound(root.to_path_buf()),
        _ => dir_read(err),
    })?;
    if !metadata.is_dir() {
        return Err(LoccError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(dir_read)?;

    Ok(())
}

/// Whether a walk entry is visited as a file.
///
/// Directories are descended, not visited. Without `follow_links`, a
/// symlink pointing at a directory is skipped entirely, while symlinks to
/// files (and dangling ones) are visited like regular files.
fn is_visited_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

/// A dangling symlink reported as a walk error while following links.
///
/// Following makes the walker stat the missing target; the link itself is
/// still a file entry and is visited like in the non-following mode.
fn dangling_symlink(err: &walkdir::Error) -> Option<PathBuf> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    let is_symlink = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    (is_symlink && fs::metadata(path).is_err()).then(|| path.to_path_buf())
}

/// Discover every file under `root`.
///
/// Fails when the root itself cannot be listed. Entries below it that the
/// walker cannot read (unreadable subdirectories, symlink loops when
/// following links) are skipped. The result is sorted so that the scan
/// visits files in a stable order.
pub fn discover_files(root: impl AsRef<Path>, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    validate_root(root)?;

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .into_iter();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                if let Some(path) = dangling_symlink(&err) {
                    files.push(path);
                } else {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                }
                continue;
            }
        };

        if entry.depth() > 0 && is_visited_file(&entry) {
            files.push(entry.into_path());
        }
    }

    files.sort();

    Ok(files)
}
