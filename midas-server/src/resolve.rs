//! Maps request paths onto the filesystem.

use std::path::PathBuf;

use midas_types::ServerConfig;

use crate::error::ServerError;

/// Resolve a request path to a filesystem path.
///
/// The first segment is looked up among the configured virtual directories;
/// when it names one, the remaining segments resolve under that directory,
/// otherwise the whole path resolves under the root. Empty and `.` segments
/// are ignored and any `..` segment is refused as not found.
///
/// # Errors
/// Returns `ServerError::NotFound` when the path contains a `..` segment.
pub fn resolve_request_path(config: &ServerConfig, uri_path: &str) -> Result<PathBuf, ServerError> {
    let segments: Vec<&str> = uri_path
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    if segments.iter().any(|s| *s == ".." || s.contains('\\')) {
        return Err(ServerError::not_found(uri_path));
    }

    let (base, rest) = match segments.split_first() {
        Some((first, rest)) => match config.virtual_dir(first) {
            Some(dir) => (dir.to_path_buf(), rest),
            None => (config.root.clone(), segments.as_slice()),
        },
        None => (config.root.clone(), segments.as_slice()),
    };

    Ok(rest.iter().fold(base, |path, segment| path.join(segment)))
}
