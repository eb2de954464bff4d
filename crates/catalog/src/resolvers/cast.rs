use std::sync::Arc;

use tmdb::{image_url, Credits, MediaType, TmdbClient, PROFILE_SIZE};

use crate::config::CastPolicy;
use crate::cooldown::Cooldown;
use crate::{AdapterError, CandidateId, CastEntry, Source};

/// Resolves the cast of a movie or TV show.
///
/// Calls are rate limited by one cooldown shared by every caller; a call
/// inside the window yields an empty cast.
pub struct CastResolver {
    client: Arc<TmdbClient>,
    policy: CastPolicy,
    cooldown: Cooldown,
}

impl CastResolver {
    pub fn new(client: Arc<TmdbClient>, policy: CastPolicy) -> Self {
        let cooldown = Cooldown::new(policy.cooldown());
        Self {
            client,
            policy,
            cooldown,
        }
    }

    pub async fn resolve(&self, media: MediaType, id: &CandidateId) -> Vec<CastEntry> {
        match self.try_resolve(media, id).await {
            Ok(cast) => cast,
            Err(AdapterError::CoolingDown(_)) => {
                tracing::debug!("Cast lookup for {} {} rejected by cooldown", media.as_str(), id);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Cast lookup failed for {} {}: {}", media.as_str(), id, e);
                Vec::new()
            }
        }
    }

    async fn try_resolve(&self, media: MediaType, id: &CandidateId) -> Result<Vec<CastEntry>, AdapterError> {
        if !self.client.has_api_key() {
            return Err(AdapterError::NotConfigured(Source::TmdbMedia));
        }
        let tmdb_id = id.as_int().ok_or_else(|| AdapterError::InvalidId {
            origin: Source::TmdbMedia,
            id: id.to_string(),
        })?;
        if !self.cooldown.try_acquire() {
            return Err(AdapterError::CoolingDown(Source::TmdbMedia));
        }
        let credits = self.client.get_credits(media, tmdb_id).await?;
        Ok(cast_from_credits(credits, &self.policy))
    }
}

/// The first `limit` billed members, optionally dropping those without a portrait
pub(crate) fn cast_from_credits(credits: Credits, policy: &CastPolicy) -> Vec<CastEntry> {
    credits
        .cast
        .into_iter()
        .take(policy.limit)
        .map(|member| CastEntry {
            character_name: member.character,
            actor_name: member.name,
            image: member
                .profile_path
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(|path| image_url(PROFILE_SIZE, path)),
        })
        .filter(|entry| !policy.skip_without_image || entry.image.is_some())
        .collect()
}
