//! Fan-wiki character adapter (fandom MediaWiki)

use std::sync::Arc;

use async_trait::async_trait;
use fandom::{CategoryInference, FandomClient, FandomError, Page};
use futures::future::join_all;

use crate::{AdapterError, CandidateKind, SearchCandidate, Source, SourceAdapter};

pub struct FandomAdapter {
    client: Arc<FandomClient>,
    wikis: Vec<String>,
    per_wiki: u32,
    inference: CategoryInference,
    /// Prefix prepended to the url-encoded image URL; empty disables proxying
    image_proxy: String,
}

impl FandomAdapter {
    pub fn new(
        client: Arc<FandomClient>,
        wikis: Vec<String>,
        per_wiki: u32,
        inference: CategoryInference,
        image_proxy: impl Into<String>,
    ) -> Self {
        Self {
            client,
            wikis,
            per_wiki,
            inference,
            image_proxy: image_proxy.into(),
        }
    }

    async fn search_wiki(&self, wiki: &str, query: &str) -> Result<Vec<Page>, FandomError> {
        let ids = self.client.search(wiki, query, self.per_wiki).await?;
        self.client.pages(wiki, &ids).await
    }
}

#[async_trait]
impl SourceAdapter for FandomAdapter {
    fn source(&self) -> Source {
        Source::Fandom
    }

    /// Wikis are queried concurrently and fail independently; the adapter
    /// only errors when every wiki failed.
    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
        let results = join_all(
            self.wikis
                .iter()
                .map(|wiki| async move { (wiki, self.search_wiki(wiki, query).await) }),
        )
        .await;

        let mut candidates = Vec::new();
        let mut last_error = None;
        let mut succeeded = 0;
        for (wiki, result) in results {
            match result {
                Ok(pages) => {
                    succeeded += 1;
                    candidates.extend(map_pages(pages, wiki, &self.inference, &self.image_proxy));
                }
                Err(e) => {
                    tracing::warn!("Fandom wiki '{}' failed for '{}': {}", wiki, query, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if succeeded == 0 => Err(e.into()),
            _ => Ok(candidates),
        }
    }
}

pub(crate) fn map_pages(
    pages: Vec<Page>,
    wiki: &str,
    inference: &CategoryInference,
    image_proxy: &str,
) -> Vec<SearchCandidate> {
    pages
        .into_iter()
        .filter_map(|page| {
            let image = page.image_url().map(|url| proxy_image(image_proxy, url));
            let source_title = inference.infer(page.category_titles());
            let kind = CandidateKind::WikiCharacter {
                source_title,
                wiki: wiki.to_string(),
            };
            SearchCandidate::new(page.pageid, page.title, kind)
                .map(|candidate| candidate.with_image(image).with_description(page.extract))
        })
        .collect()
}

pub(crate) fn proxy_image(prefix: &str, url: &str) -> String {
    if prefix.is_empty() {
        url.to_string()
    } else {
        format!("{}{}", prefix, urlencoding::encode(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fandom::models::PagesResponse;

    const PROXY: &str = "https://wsrv.nl/?url=";

    fn pages_fixture() -> Vec<Page> {
        let json = r#"{"query": {"pages": {
            "9120": {"pageid": 9120, "title": "Jesse Pinkman",
                     "original": {"source": "https://static.wikia.nocookie.net/j.png"},
                     "categories": [{"title": "Category:Males"}, {"title": "Category:Breaking Bad Heroes"}]},
            "5021": {"pageid": 5021, "title": "Walter White",
                     "thumbnail": {"source": "https://static.wikia.nocookie.net/w.png?cb=1"},
                     "extract": "Walter Hartwell White Sr. is the main protagonist...",
                     "categories": [{"title": "Category:Breaking Bad Villains"}]},
            "7": {"pageid": 7, "title": "Gus Fring"}
        }}}"#;
        let response: PagesResponse = serde_json::from_str(json).unwrap();
        response.query.unwrap().pages.into_values().collect()
    }

    #[test]
    fn test_map_pages() {
        let candidates = map_pages(pages_fixture(), "villains", &CategoryInference::default(), PROXY);

        let titles: Vec<_> = candidates.iter().map(|c| c.title()).collect();
        assert_eq!(titles, ["Gus Fring", "Walter White", "Jesse Pinkman"]);

        let walter = &candidates[1];
        assert_eq!(
            walter.kind(),
            &CandidateKind::WikiCharacter {
                source_title: Some("Breaking Bad".to_string()),
                wiki: "villains".to_string(),
            }
        );
        assert_eq!(
            walter.image(),
            Some("https://wsrv.nl/?url=https%3A%2F%2Fstatic.wikia.nocookie.net%2Fw.png%3Fcb%3D1")
        );
        assert!(walter.description().unwrap().starts_with("Walter Hartwell"));

        assert_eq!(candidates[0].kind().source_title(), None);
        assert_eq!(candidates[0].image(), None);
        assert_eq!(candidates[2].kind().source_title(), Some("Breaking Bad"));
    }

    #[test]
    fn test_proxy_can_be_disabled() {
        assert_eq!(
            proxy_image("", "https://static.wikia.nocookie.net/w.png"),
            "https://static.wikia.nocookie.net/w.png"
        );
    }

    #[tokio::test]
    async fn test_all_wikis_failing_is_an_error() {
        // Nothing listens on port 9; every request fails to connect
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = FandomClient::with_url_template(http, "http://127.0.0.1:9/{wiki}");
        let adapter = FandomAdapter::new(
            Arc::new(client),
            vec!["heroes".to_string(), "villains".to_string()],
            2,
            CategoryInference::default(),
            PROXY,
        );
        assert!(adapter.fetch("walter").await.is_err());
        assert!(adapter.search("walter").await.is_empty());
    }

    #[tokio::test]
    async fn test_no_wikis_yields_empty() {
        let client = FandomClient::new(reqwest::Client::new());
        let adapter = FandomAdapter::new(Arc::new(client), vec![], 2, CategoryInference::default(), PROXY);
        assert!(adapter.fetch("walter").await.unwrap().is_empty());
    }
}
