//! Search-as-you-type over an [`Aggregator`]

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{sleep, Instant};

use crate::{Aggregator, SearchCandidate};

/// When a query is worth dispatching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    /// Minimum length in characters, after trimming
    pub min_query_len: usize,
    /// Quiet period after the last input before dispatching
    pub debounce: Duration,
}

impl QueryPolicy {
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_query_len
    }
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            debounce: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The input became too short; any shown results are stale
    Cleared,
    /// Results for the latest dispatched query
    Results {
        query: String,
        candidates: Vec<SearchCandidate>,
    },
}

/// Handle to a running search session.
///
/// Every submitted input supersedes the previous one. Results of a
/// superseded search are dropped when they arrive; the search itself is
/// left to finish.
pub struct SearchSession {
    inputs: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl SearchSession {
    pub fn spawn(
        aggregator: Arc<Aggregator>,
        policy: QueryPolicy,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (inputs, input_rx) = mpsc::unbounded_channel();
        let (event_tx, events) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(aggregator, policy, input_rx, event_tx));
        (Self { inputs, task }, events)
    }

    /// Replace the current input
    pub fn submit(&self, input: impl Into<String>) {
        if self.inputs.send(input.into()).is_err() {
            tracing::warn!("Search session already stopped, input dropped");
        }
    }

    /// Stop accepting input, dispatch a still-pending query at once and wait
    /// for in-flight searches.
    pub async fn close(self) {
        drop(self.inputs);
        if let Err(e) = self.task.await {
            tracing::error!("Search session task failed: {}", e);
        }
    }
}

type Outcome = (u64, String, Vec<SearchCandidate>);

async fn run(
    aggregator: Arc<Aggregator>,
    policy: QueryPolicy,
    mut inputs: mpsc::UnboundedReceiver<String>,
    events: mpsc::UnboundedSender<SessionEvent>,
) {
    let debounce = sleep(policy.debounce);
    tokio::pin!(debounce);

    let mut pending: Option<String> = None;
    // Bumped on every input; a search only reports if it is still current
    let mut generation: u64 = 0;
    let mut in_flight: JoinSet<Outcome> = JoinSet::new();
    let mut open = true;

    let dispatch = |in_flight: &mut JoinSet<Outcome>, query: String, generation: u64| {
        let aggregator = aggregator.clone();
        tracing::debug!("Dispatching search for '{}'", query);
        in_flight.spawn(async move {
            let candidates = aggregator.search(&query).await;
            (generation, query, candidates)
        });
    };

    loop {
        tokio::select! {
            input = inputs.recv(), if open => match input {
                Some(raw) => {
                    generation += 1;
                    let query = raw.trim().to_string();
                    if policy.accepts(&query) {
                        pending = Some(query);
                        debounce.as_mut().reset(Instant::now() + policy.debounce);
                    } else {
                        pending = None;
                        let _ = events.send(SessionEvent::Cleared);
                    }
                }
                None => {
                    open = false;
                    if let Some(query) = pending.take() {
                        dispatch(&mut in_flight, query, generation);
                    }
                }
            },
            () = &mut debounce, if pending.is_some() => {
                if let Some(query) = pending.take() {
                    dispatch(&mut in_flight, query, generation);
                }
            },
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => match joined {
                Ok((finished, query, candidates)) if finished == generation => {
                    let _ = events.send(SessionEvent::Results { query, candidates });
                }
                Ok((_, query, _)) => {
                    tracing::debug!("Discarding results of superseded query '{}'", query);
                }
                Err(e) => {
                    tracing::error!("Search task failed: {}", e);
                }
            },
            else => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdapterError, CandidateKind, Source, SourceAdapter};
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// Echoes the query back as a single candidate after `delay`
    struct EchoAdapter {
        queries: Mutex<Vec<String>>,
        delay: Duration,
    }

    #[async_trait]
    impl SourceAdapter for EchoAdapter {
        fn source(&self) -> Source {
            Source::Jikan
        }

        async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
            self.queries.lock().push(query.to_string());
            tokio::time::sleep(self.delay).await;
            Ok(SearchCandidate::new(1, query, CandidateKind::Character)
                .into_iter()
                .collect())
        }
    }

    fn session(delay: Duration) -> (SearchSession, mpsc::UnboundedReceiver<SessionEvent>, Arc<EchoAdapter>) {
        let adapter = Arc::new(EchoAdapter {
            queries: Mutex::new(Vec::new()),
            delay,
        });
        let aggregator = Arc::new(Aggregator::new(vec![adapter.clone() as Arc<dyn SourceAdapter>]));
        let (session, events) = SearchSession::spawn(aggregator, QueryPolicy::default());
        (session, events, adapter)
    }

    async fn drain(mut events: mpsc::UnboundedReceiver<SessionEvent>) -> Vec<SessionEvent> {
        let mut collected = Vec::new();
        while let Some(event) = events.recv().await {
            collected.push(event);
        }
        collected
    }

    fn result_queries(events: &[SessionEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|event| match event {
                SessionEvent::Results { query, .. } => Some(query.as_str()),
                SessionEvent::Cleared => None,
            })
            .collect()
    }

    #[test]
    fn test_policy_trims_before_measuring() {
        let policy = QueryPolicy::default();
        assert!(!policy.accepts("  ab  "));
        assert!(policy.accepts(" abc"));
        assert!(policy.accepts("日本語"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_inputs_dispatch_once() {
        let (session, events, adapter) = session(Duration::ZERO);
        session.submit("wal");
        session.submit("walt");
        session.submit("walter");

        sleep(Duration::from_millis(700)).await;
        assert!(adapter.queries.lock().is_empty());

        sleep(Duration::from_millis(200)).await;
        assert_eq!(*adapter.queries.lock(), ["walter"]);

        session.close().await;
        assert_eq!(result_queries(&drain(events).await), ["walter"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_input_clears_without_dispatch() {
        let (session, events, adapter) = session(Duration::ZERO);
        session.submit("walter");
        session.submit("wa");

        sleep(Duration::from_secs(2)).await;
        session.close().await;

        assert_eq!(drain(events).await, [SessionEvent::Cleared]);
        assert!(adapter.queries.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_results_are_discarded() {
        let (session, events, adapter) = session(Duration::from_secs(2));
        session.submit("walter");
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(*adapter.queries.lock(), ["walter"]);

        session.submit("jesse");
        session.close().await;

        // Both searches ran to completion; only the latest reported
        assert_eq!(*adapter.queries.lock(), ["walter", "jesse"]);
        assert_eq!(result_queries(&drain(events).await), ["jesse"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_flushes_pending_query() {
        let (session, events, adapter) = session(Duration::ZERO);
        session.submit("  ryuk ");
        session.close().await;

        assert_eq!(*adapter.queries.lock(), ["ryuk"]);
        let events = drain(events).await;
        match events.as_slice() {
            [SessionEvent::Results { query, candidates }] => {
                assert_eq!(query, "ryuk");
                assert_eq!(candidates[0].title(), "ryuk");
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }
}
