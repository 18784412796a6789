//! Source discovery: find files and classify them.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files exist under the scan root and which language each belongs to. It
//! provides:
//!
//! - **Walking**: Recursive file discovery with a fixed symlink policy
//! - **Classification**: Extension → language lookup with a binary guard
//!
//! ## Example
//!
//! ```rust,ignore
//! use locclib::source::{classify, discover_files};
//!
//! for path in discover_files(".", &ScanOptions::new())? {
//!     println!("{}: {:?}", path.display(), classify(&path));
//! }
//! ```

pub mod language;
pub mod walk;

pub use language::{
    classify, is_code_file, language_of, normalized_extension, BINARY_EXTENSIONS, LANGUAGES,
};
pub use walk::{discover_files, validate_root};
