//! The injected HTTP collaborator.

use async_trait::async_trait;
use url::Url;

use crate::query::RowQuery;
use crate::value::Row;

/// Why a row fetch failed.
///
/// The component treats both kinds identically: the failure is logged, the
/// loading indicator stops, and the empty placeholder shows if no rows are
/// loaded. Failures never propagate to the caller of an event path.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a usable response.
    #[error("network failure: {0}")]
    Network(String),
    /// The response arrived but could not be decoded into rows.
    #[error("decode failure: {0}")]
    Decode(String),
}

/// Fetches ordered windows of rows from a backend.
///
/// Implementations own the transport entirely; the component only builds the
/// query and consumes the ordered result. An empty result is not an error.
#[async_trait]
pub trait RowFetcher: Send + Sync {
    async fn fetch_rows(&self, endpoint: &Url, query: &RowQuery) -> Result<Vec<Row>, FetchError>;
}
