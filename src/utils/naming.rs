//! File name and user path helpers

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Drop everything from the last `.` on; names without a dot are kept whole.
///
/// # Examples
/// ```
/// use icoforge::utils::naming::strip_extension;
/// assert_eq!(strip_extension("photo.png"), "photo");
/// assert_eq!(strip_extension("a.b.c"), "a.b");
/// assert_eq!(strip_extension("noext"), "noext");
/// ```
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => filename,
    }
}

/// Output stem for a file name, without going through a lossy string.
///
/// UTF-8 names follow [`strip_extension`]. Other names keep their raw
/// bytes and are cut at the last `.` by [`Path::file_stem`], so distinct
/// names never collapse onto the same stem.
pub fn output_stem(file_name: &OsStr) -> OsString {
    match file_name.to_str() {
        Some(name) => OsString::from(strip_extension(name)),
        None => Path::new(file_name)
            .file_stem()
            .unwrap_or(file_name)
            .to_os_string(),
    }
}

/// Clean up a path typed or pasted by the user.
///
/// Surrounding whitespace is trimmed, then one outer pair of matching
/// straight quotes (`'...'` or `"..."`) is removed.
pub fn normalize_path_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['\'', '"'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}
