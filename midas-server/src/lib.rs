//! midas-server
//!
//! Development static file server for Midas chart pages and the JSON data
//! files they plot.
//!
//! Request paths resolve under a root directory, or under an aliased
//! virtual directory when the first path segment names one. Files are
//! served with a content type from a fixed extension table; directories
//! get an HTML index of data files and chart pages.
//!
//! Modules:
//! - `cli`: command-line arguments and their environment fallbacks.
//! - `error`: `ServerError` and its HTTP mapping.
//! - `listing`: directory index rendering.
//! - `mime`: extension to content-type table.
//! - `resolve`: request path to filesystem path mapping.
#![warn(missing_docs)]

pub mod cli;
mod error;
pub mod listing;
pub mod mime;
pub mod resolve;
mod routes;

use std::future::Future;

use tokio::net::TcpListener;

pub use error::ServerError;
pub use midas_types::{ServerConfig, VirtualDirectory};
pub use routes::router;

/// Serve `config` on an already bound listener until `shutdown` resolves.
///
/// # Errors
/// Returns `ServerError::Io` if the accept loop fails.
pub async fn serve<F>(listener: TcpListener, config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind `config.address()` and serve until Ctrl+C.
///
/// # Errors
/// Returns `ServerError::Io` if the address cannot be bound or serving fails.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.address()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        root = %config.root.display(),
        aliases = config.virtual_dirs.len(),
        listing = config.directory_listing,
        "midas-server listening"
    );
    serve(listener, config, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, stopping");
}
