//! Movie/TV and person adapters (TMDB)

use std::sync::Arc;

use async_trait::async_trait;
use tmdb::{image_url, MultiResult, Person, TmdbClient, POSTER_SIZE, PROFILE_SIZE};

use crate::models::parse_year;
use crate::{AdapterError, CandidateKind, SearchCandidate, Source, SourceAdapter};

/// Movies and TV shows from `/search/multi`
pub struct TmdbMediaAdapter {
    client: Arc<TmdbClient>,
    limit: usize,
}

impl TmdbMediaAdapter {
    pub fn new(client: Arc<TmdbClient>, limit: usize) -> Self {
        Self { client, limit }
    }
}

#[async_trait]
impl SourceAdapter for TmdbMediaAdapter {
    fn source(&self) -> Source {
        Source::TmdbMedia
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
        if !self.client.has_api_key() {
            return Err(AdapterError::NotConfigured(Source::TmdbMedia));
        }
        let response = self.client.search_multi(query).await?;
        Ok(map_media(response.results, self.limit))
    }
}

pub(crate) fn map_media(results: Vec<MultiResult>, limit: usize) -> Vec<SearchCandidate> {
    results
        .into_iter()
        .filter_map(|result| match result {
            MultiResult::Movie(movie) => {
                let year = parse_year(movie.release_date.as_deref());
                let poster = movie.poster_path.as_deref().map(|p| image_url(POSTER_SIZE, p));
                SearchCandidate::new(movie.id, movie.title, CandidateKind::Movie { year }).map(
                    |candidate| {
                        candidate
                            .with_image(poster)
                            .with_description(Some(movie.overview))
                    },
                )
            }
            MultiResult::Tv(show) => {
                let year = parse_year(show.first_air_date.as_deref());
                let poster = show.poster_path.as_deref().map(|p| image_url(POSTER_SIZE, p));
                SearchCandidate::new(show.id, show.name, CandidateKind::Tv { year }).map(
                    |candidate| {
                        candidate
                            .with_image(poster)
                            .with_description(Some(show.overview))
                    },
                )
            }
            MultiResult::Person(_) | MultiResult::Unknown => None,
        })
        .take(limit)
        .collect()
}

/// Actors from `/search/person`
pub struct TmdbPersonAdapter {
    client: Arc<TmdbClient>,
    limit: usize,
}

impl TmdbPersonAdapter {
    pub fn new(client: Arc<TmdbClient>, limit: usize) -> Self {
        Self { client, limit }
    }
}

#[async_trait]
impl SourceAdapter for TmdbPersonAdapter {
    fn source(&self) -> Source {
        Source::TmdbPerson
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
        if !self.client.has_api_key() {
            return Err(AdapterError::NotConfigured(Source::TmdbPerson));
        }
        let response = self.client.search_person(query).await?;
        Ok(map_people(response.results, self.limit))
    }
}

pub(crate) fn map_people(people: Vec<Person>, limit: usize) -> Vec<SearchCandidate> {
    people
        .into_iter()
        .filter_map(|person| {
            let portrait = person
                .profile_path
                .as_deref()
                .map(|p| image_url(PROFILE_SIZE, p));
            SearchCandidate::new(person.id, person.name, CandidateKind::Actor).map(|candidate| {
                candidate
                    .with_image(portrait)
                    .with_description(person.known_for_department)
            })
        })
        .take(limit)
        .collect()
}
