//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use midas_types::{ServerConfig, VirtualDirectory};

use crate::error::ServerError;

/// Serve Midas chart pages and their JSON data files.
#[derive(Parser, Debug)]
#[command(name = "midas-server", version, about, long_about = None)]
pub struct Args {
    /// Port to listen on
    #[arg(env = "MIDAS_PORT", default_value_t = 8888)]
    pub port: u16,

    /// Interface address to bind
    #[arg(long, env = "MIDAS_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Directory served at `/` (defaults to the working directory)
    #[arg(long, env = "MIDAS_ROOT")]
    pub root: Option<PathBuf>,

    /// Serve DIR under the `/NAME` prefix; repeatable
    #[arg(
        long = "alias",
        value_name = "NAME=DIR",
        env = "MIDAS_ALIASES",
        value_delimiter = ','
    )]
    pub aliases: Vec<VirtualDirectory>,

    /// Answer directory requests with 404 instead of an HTML index
    #[arg(long, env = "MIDAS_NO_LISTING")]
    pub no_listing: bool,
}

impl Args {
    /// Build the server configuration.
    ///
    /// # Errors
    /// Returns `ServerError::Io` when no root is given and the working
    /// directory cannot be determined.
    pub fn into_config(self) -> Result<ServerConfig, ServerError> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };
        Ok(ServerConfig {
            bind: self.bind,
            port: self.port,
            root,
            virtual_dirs: self.aliases,
            directory_listing: !self.no_listing,
        })
    }
}
