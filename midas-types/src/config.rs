//! Configuration for the static chart server.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A URL prefix served from a directory outside the server root.
///
/// A request for `/<alias>/a/b.json` is resolved to `<path>/a/b.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualDirectory {
    /// First URL path segment that selects this directory.
    pub alias: String,
    /// Directory the remainder of the URL path is resolved against.
    pub path: PathBuf,
}

impl FromStr for VirtualDirectory {
    type Err = String;

    /// Parses `alias=/some/dir`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (alias, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ALIAS=DIR, got `{s}`"))?;
        let alias = alias.trim().trim_matches('/');
        let path = path.trim();
        if alias.is_empty() || alias.contains('/') {
            return Err(format!("invalid alias in `{s}`"));
        }
        if path.is_empty() {
            return Err(format!("empty directory in `{s}`"));
        }
        Ok(Self {
            alias: alias.to_owned(),
            path: PathBuf::from(path),
        })
    }
}

/// Settings for the development chart server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface address to bind.
    pub bind: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Directory that request paths are resolved against.
    pub root: PathBuf,
    /// Aliased directories outside `root`.
    pub virtual_dirs: Vec<VirtualDirectory>,
    /// Render an HTML index of chart pages and data files for directories.
    pub directory_listing: bool,
}

impl ServerConfig {
    /// Directory registered for `alias`, if any.
    #[must_use]
    pub fn virtual_dir(&self, alias: &str) -> Option<&Path> {
        self.virtual_dirs
            .iter()
            .find(|v| v.alias == alias)
            .map(|v| v.path.as_path())
    }

    /// `bind:port` socket address string.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_owned(),
            port: 8888,
            root: PathBuf::from("."),
            virtual_dirs: Vec::new(),
            directory_listing: true,
        }
    }
}
