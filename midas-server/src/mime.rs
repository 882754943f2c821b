//! Fixed extension to content-type table.

use std::path::Path;

/// Content type for extensions outside the table.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Content type for `path`, chosen by extension (case-insensitive).
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_MIME;
    };
    match ext.to_ascii_lowercase().as_str() {
        "htm" | "html" => "text/html",
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "js" => "text/javascript",
        "css" => "text/css",
        "json" => "application/json",
        _ => DEFAULT_MIME,
    }
}
