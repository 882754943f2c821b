use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures while serving a request or starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Nothing servable at the requested path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Filesystem or socket failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Helper: build a `NotFound` error for a request path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "404 Not Found\n".to_owned()),
            Self::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}\n")),
        };
        (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn parts(err: ServerError) -> (StatusCode, String, String) {
        let resp = err.into_response();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn io_error_is_plain_500_with_message() {
        let (status, ct, body) = parts(ServerError::Io(std::io::Error::other("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ct, "text/plain");
        assert_eq!(body, "boom\n");
    }

    #[tokio::test]
    async fn not_found_is_plain_404() {
        let (status, ct, body) = parts(ServerError::not_found("/x.json")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(ct, "text/plain");
        assert_eq!(body, "404 Not Found\n");
    }
}
