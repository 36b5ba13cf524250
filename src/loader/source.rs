//! Building source abstraction.
//!
//! This module defines the [`BuildingSource`] trait that abstracts over where
//! the raw building payload comes from. The loader only needs the payload
//! text; decoding and validation happen in [`super::decode`].
//!
//! # Implementations
//!
//! - [`HttpSource`]: one unauthenticated `GET` against the configured endpoint
//! - [`FileSource`]: a JSON file on disk
//! - [`StaticSource`]: an in-memory payload

use crate::domain::LoadError;
use futures_util::future::BoxFuture;
use std::path::PathBuf;

/// User agent sent with every HTTP request.
const USER_AGENT: &str = concat!("campusnav/", env!("CARGO_PKG_VERSION"));

/// Abstraction over the origin of the building payload.
///
/// Each call to [`fetch`](BuildingSource::fetch) performs exactly one read.
/// There is no retry: a failure is terminal for the session.
///
/// # Examples
///
/// ```
/// use campusnav::loader::{BuildingSource, StaticSource};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let source = StaticSource::new(r#"[{"name": "Old Main", "type": "Landmark"}]"#);
/// let payload = source.fetch().await?;
/// assert!(payload.contains("Old Main"));
/// # Ok::<(), campusnav::LoadError>(())
/// # }).unwrap();
/// ```
pub trait BuildingSource: Send + Sync {
    /// Reads the raw payload text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on transport failures, non-success statuses, or
    /// unreadable files.
    fn fetch(&self) -> BoxFuture<'_, Result<String, LoadError>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// HTTP source issuing a single `GET` request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    /// Creates a source for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Request`] if the HTTP client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new(endpoint: impl Into<String>) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint this source reads from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl BuildingSource for HttpSource {
    fn fetch(&self) -> BoxFuture<'_, Result<String, LoadError>> {
        Box::pin(async move {
            tracing::debug!(endpoint = %self.endpoint, "requesting building list");

            let response = self.client.get(&self.endpoint).send().await?;
            let status = response.status();

            if !status.is_success() {
                tracing::debug!(status = status.as_u16(), "building request rejected");
                return Err(LoadError::Status {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            let body = response.text().await?;
            tracing::debug!(bytes = body.len(), "building list received");
            Ok(body)
        })
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Source reading a JSON payload from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BuildingSource for FileSource {
    fn fetch(&self) -> BoxFuture<'_, Result<String, LoadError>> {
        Box::pin(async move {
            tracing::debug!(path = ?self.path, "reading building file");
            Ok(tokio::fs::read_to_string(&self.path).await?)
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Source returning a fixed payload.
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl BuildingSource for StaticSource {
    fn fetch(&self) -> BoxFuture<'_, Result<String, LoadError>> {
        Box::pin(std::future::ready(Ok(self.payload.clone())))
    }

    fn describe(&self) -> String {
        "static payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_source_reads_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buildings.json");
        std::fs::write(&path, "[]").unwrap();

        let payload = FileSource::new(&path).fetch().await.unwrap();
        assert_eq!(payload, "[]");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("absent.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn http_source_keeps_endpoint() {
        let source = HttpSource::new("http://127.0.0.1:5000/buildings").unwrap();
        assert_eq!(source.endpoint(), "http://127.0.0.1:5000/buildings");
        assert_eq!(source.describe(), "http://127.0.0.1:5000/buildings");
    }
}
