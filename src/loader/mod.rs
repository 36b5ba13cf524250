//! Loader layer: one read, then validation into the working set.
//!
//! # Modules
//!
//! - `source`: [`BuildingSource`] trait with HTTP, file, and in-memory sources
//! - `decode`: payload validation and whitespace normalization
//!
//! # Example
//!
//! ```no_run
//! use campusnav::loader::{load_working_set, HttpSource};
//!
//! # async fn run() -> Result<(), campusnav::LoadError> {
//! let source = HttpSource::new("http://127.0.0.1:5000/buildings")?;
//! let working_set = load_working_set(&source).await?;
//! println!("{} buildings", working_set.len());
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod source;

pub use decode::decode_working_set;
pub use source::{BuildingSource, FileSource, HttpSource, StaticSource};

use crate::domain::{Building, LoadError};
use tracing::Instrument;

/// Fetches the payload from `source` and decodes it into the working set.
///
/// This is the single load of a session. Nothing is retried and nothing is
/// returned partially: either the full working set or a [`LoadError`].
///
/// # Errors
///
/// Propagates the source's transport error or the decoder's
/// [`LoadError::Decode`].
pub async fn load_working_set(source: &dyn BuildingSource) -> Result<Vec<Building>, LoadError> {
    let span = tracing::info_span!("load_working_set", source = %source.describe());

    async move {
        let payload = source.fetch().await.map_err(|e| {
            tracing::error!(error = %e, "failed to fetch buildings");
            e
        })?;

        let working_set = decode_working_set(&payload).map_err(|e| {
            tracing::error!(error = %e, "failed to decode buildings");
            e
        })?;

        tracing::info!(count = working_set.len(), "loaded buildings");
        Ok(working_set)
    }
    .instrument(span)
    .await
}
