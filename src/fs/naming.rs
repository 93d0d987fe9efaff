//! Filename sanitization and extension handling.

use std::path::Path;

/// Characters rejected by at least one common filesystem.
pub const DISALLOWED_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Check whether a character is not allowed inside a path segment.
pub fn is_disallowed_char(c: char) -> bool {
    DISALLOWED_CHARS.contains(&c)
}

/// Make a name safe for use as a single path segment.
///
/// Disallowed characters become spaces, whitespace runs collapse to one space,
/// the result is trimmed, and a space directly before a period is dropped so
/// `"Name ."` turns into `"Name."`. Empty or all-invalid input yields an
/// empty string.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if is_disallowed_char(c) { ' ' } else { c })
        .collect();

    let collapsed = replaced
        .split(is_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    collapsed.replace(" .", ".")
}

/// Unicode whitespace plus the ASCII information separators (U+001C to U+001F).
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Sanitize a path component, substituting `default` when nothing usable is left.
///
/// A value that sanitizes to nothing, or to only dots (`.`, `..`), would make
/// an empty or relative segment and is replaced.
pub fn sanitize_component(value: Option<&str>, default: &str) -> String {
    let sanitized = value.map(sanitize_filename).unwrap_or_default();
    if is_usable_segment(&sanitized) {
        sanitized
    } else {
        sanitize_filename(default)
    }
}

/// Whether a sanitized string can stand alone as a path segment.
pub fn is_usable_segment(segment: &str) -> bool {
    !segment.chars().all(|c| c == '.')
}

/// Get the lowercased final extension of a path, including the leading dot.
///
/// Returns `None` for names without an extension, including dotfiles such as
/// `.nes`.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}
