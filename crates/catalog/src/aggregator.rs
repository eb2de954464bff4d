//! Concurrent fan-out over all source adapters

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::join_all;
use futures::FutureExt;

use crate::ranker::rank;
use crate::{SearchCandidate, Source, SourceAdapter};

/// Queries every adapter concurrently and merges their results.
///
/// Results are concatenated in [`Source`] order, whatever order adapters
/// finish in, and then ranked against the query.
pub struct Aggregator {
    adapters: Vec<Arc<dyn SourceAdapter>>,
}

impl Aggregator {
    pub fn new(mut adapters: Vec<Arc<dyn SourceAdapter>>) -> Self {
        adapters.sort_by_key(|adapter| adapter.source());
        Self { adapters }
    }

    /// Registered sources in precedence order
    pub fn sources(&self) -> Vec<Source> {
        self.adapters.iter().map(|adapter| adapter.source()).collect()
    }

    /// Concatenated results of all adapters, unranked.
    ///
    /// A panicking adapter contributes nothing.
    pub async fn gather(&self, query: &str) -> Vec<SearchCandidate> {
        let searches = self.adapters.iter().map(|adapter| async move {
            match AssertUnwindSafe(adapter.search(query)).catch_unwind().await {
                Ok(candidates) => candidates,
                Err(_) => {
                    tracing::error!("{} adapter panicked while searching '{}'", adapter.source(), query);
                    Vec::new()
                }
            }
        });

        join_all(searches).await.into_iter().flatten().collect()
    }

    /// Fan out, merge and rank
    pub async fn search(&self, query: &str) -> Vec<SearchCandidate> {
        let candidates = rank(self.gather(query).await, query);
        tracing::info!(
            "Found {} candidates for '{}' across {} sources",
            candidates.len(),
            query,
            self.adapters.len()
        );
        candidates
    }
}
