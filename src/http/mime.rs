//! Content types by file name.

pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_HTML: &str = "text/html";
pub const IMAGE_ICON: &str = "image/x-icon";

/// The one file served as raw bytes.
pub const FAVICON: &str = "favicon.ico";

/// Returns the content type for `file_name`.
///
/// Unknown suffixes map to an empty string and are sent as such.
///
/// ```
/// # use lantern::http::mime::content_type_for;
/// assert_eq!(content_type_for("notes.TXT"), "text/plain");
/// assert_eq!(content_type_for("app.js"), "");
/// ```
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();

    if lower.ends_with(".txt") {
        TEXT_PLAIN
    } else if lower.ends_with(".html") || lower.ends_with(".htm") {
        TEXT_HTML
    } else if is_favicon(file_name) {
        IMAGE_ICON
    } else {
        ""
    }
}

pub fn is_favicon(file_name: &str) -> bool {
    file_name.eq_ignore_ascii_case(FAVICON)
}
