//! Source adapter trait definition

use async_trait::async_trait;

use crate::{AdapterError, SearchCandidate, Source};

/// Integration with one external catalog
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Which catalog this adapter queries
    fn source(&self) -> Source;

    /// Query the upstream catalog and normalize its results
    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError>;

    /// Fault-isolated search: any error becomes an empty result
    async fn search(&self, query: &str) -> Vec<SearchCandidate> {
        match self.fetch(query).await {
            Ok(candidates) => {
                tracing::debug!(
                    "{} returned {} candidates for '{}'",
                    self.source(),
                    candidates.len(),
                    query
                );
                candidates
            }
            Err(e) => {
                tracing::warn!("{} search failed for '{}': {}", self.source(), query, e);
                Vec::new()
            }
        }
    }
}
