use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use midas_types::ServerConfig;

use crate::error::ServerError;
use crate::listing::render_directory;
use crate::mime::mime_for;
use crate::resolve::resolve_request_path;

/// Build the router. Every method lands on the file handler; the wildcard
/// capture hands it the percent-decoded request path.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/", any(serve_root))
        .route("/{*path}", any(serve_nested))
        .with_state(Arc::new(config))
}

async fn serve_root(State(config): State<Arc<ServerConfig>>) -> Result<Response, ServerError> {
    serve_path(&config, "/").await
}

async fn serve_nested(
    State(config): State<Arc<ServerConfig>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ServerError> {
    let Ok(Path(path)) = path else {
        tracing::debug!("undecodable request path");
        return Err(ServerError::not_found("<undecodable>"));
    };
    serve_path(&config, &format!("/{path}")).await
}

#[tracing::instrument(name = "midas_server::serve_path", level = "debug", skip(config))]
async fn serve_path(config: &ServerConfig, path: &str) -> Result<Response, ServerError> {
    tracing::debug!("request");
    let target = resolve_request_path(config, path).inspect_err(|_| {
        tracing::debug!("refused parent segment");
    })?;

    let Ok(meta) = tokio::fs::metadata(&target).await else {
        tracing::debug!("not found");
        return Err(ServerError::not_found(path));
    };

    if meta.is_dir() {
        if !config.directory_listing {
            tracing::debug!("directory listing disabled");
            return Err(ServerError::not_found(path));
        }
        let html = render_directory(&target).await.inspect_err(|e| {
            tracing::warn!(error = %e, "failed to list directory");
        })?;
        return Ok(([(header::CONTENT_TYPE, "text/html")], html).into_response());
    }

    let body = tokio::fs::read(&target).await.map_err(|e| {
        tracing::warn!(error = %e, "failed to read file");
        ServerError::from(e)
    })?;
    Ok(([(header::CONTENT_TYPE, mime_for(&target))], body).into_response())
}
