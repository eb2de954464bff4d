//! Book adapter (Open Library)

use std::sync::Arc;

use async_trait::async_trait;
use openlibrary::{BookDoc, OpenLibraryClient};

use crate::{AdapterError, CandidateKind, SearchCandidate, Source, SourceAdapter};

pub struct OpenLibraryAdapter {
    client: Arc<OpenLibraryClient>,
    limit: u32,
}

impl OpenLibraryAdapter {
    pub fn new(client: Arc<OpenLibraryClient>, limit: u32) -> Self {
        Self { client, limit }
    }
}

#[async_trait]
impl SourceAdapter for OpenLibraryAdapter {
    fn source(&self) -> Source {
        Source::OpenLibrary
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
        let response = self.client.search_books(query, self.limit).await?;
        Ok(map_books(response.docs))
    }
}

/// Books are keyed by their work key, e.g. `/works/OL45804W`
pub(crate) fn map_books(docs: Vec<BookDoc>) -> Vec<SearchCandidate> {
    docs.into_iter()
        .filter_map(|doc| {
            let cover = doc.cover_url();
            let authors = doc.authors();
            SearchCandidate::new(doc.key, doc.title, CandidateKind::Book)
                .map(|candidate| candidate.with_image(cover).with_description(authors))
        })
        .collect()
}
