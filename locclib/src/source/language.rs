//! Extension-based language classification.
//!
//! A file is classified purely by its normalized extension: the part of the
//! file name starting at the last `.`, lowercased, with the dot kept
//! (`Main.PY` → `.py`). Leading dots of the name never start an extension,
//! so `.bashrc` and `README` have none and are never code.

use std::path::Path;

/// Extension → language name. Several extensions may share a language.
pub const LANGUAGES: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".java", "Java"),
    (".cpp", "C++"),
    (".c", "C"),
    (".h", "C Header"),
    (".hpp", "C++ Header"),
    (".sh", "Shell Script"),
    (".rb", "Ruby"),
    (".php", "PHP"),
    (".html", "HTML"),
    (".css", "CSS"),
    (".sql", "SQL"),
    (".go", "Go"),
    (".ts", "TypeScript"),
    (".yml", "YAML"),
    (".yaml", "YAML"),
    (".json", "JSON"),
    (".xml", "XML"),
    (".txt", "Text"),
    (".csv", "CSV"),
];

/// Extensions that are never treated as text, whatever [`LANGUAGES`] says.
pub const BINARY_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".mp3", ".ogg", ".wav", ".exe", ".dll", ".bin", ".lock",
    ".zip", ".tar", ".gz", ".rar", ".7z",
];

/// Return the normalized extension of the final path segment.
///
/// ```rust
/// use locclib::normalized_extension;
/// use std::path::Path;
///
/// assert_eq!(normalized_extension(Path::new("src/App.TS")).as_deref(), Some(".ts"));
/// assert_eq!(normalized_extension(Path::new("archive.tar.gz")).as_deref(), Some(".gz"));
/// assert_eq!(normalized_extension(Path::new(".bashrc")), None);
/// assert_eq!(normalized_extension(Path::new("Makefile")), None);
/// ```
pub fn normalized_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')? + stem_start;
    Some(name[dot..].to_lowercase())
}

/// Look up the language for a normalized extension.
///
/// Callers are expected to pass an extension accepted by [`is_code_file`];
/// anything else yields `None`.
pub fn language_of(extension: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}

fn is_binary_extension(extension: &str) -> bool {
    BINARY_EXTENSIONS.contains(&extension)
}

/// Check whether a file is counted as code.
///
/// True iff its extension is in [`LANGUAGES`] and not in
/// [`BINARY_EXTENSIONS`].
pub fn is_code_file(path: &Path) -> bool {
    classify(path).is_some()
}

/// Return the language of a code file, or `None` for ignored files.
pub fn classify(path: &Path) -> Option<&'static str> {
    let extension = normalized_extension(path)?;
    if is_binary_extension(&extension) {
        return None;
    }
    language_of(&extension)
}
