use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::models::IssuedToken;
use crate::IgdbError;

/// Source of the current instant, replaceable in tests
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Acquires a fresh bearer token from the identity provider
#[async_trait]
pub trait TokenExchange: Send + Sync {
    async fn exchange(&self) -> crate::Result<IssuedToken>;
}

/// Cached bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub expires_at: Instant,
}

impl Credential {
    pub fn is_valid_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Single-slot, expiry-gated token cache.
///
/// Two cold callers racing on an empty slot may both run the exchange; the
/// later write wins and both tokens stay valid upstream.
pub struct TokenCache {
    exchange: Arc<dyn TokenExchange>,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<Credential>>,
}

impl TokenCache {
    pub fn new(exchange: Arc<dyn TokenExchange>) -> Self {
        Self::with_clock(exchange, Arc::new(SystemClock))
    }

    pub fn with_clock(exchange: Arc<dyn TokenExchange>, clock: Arc<dyn Clock>) -> Self {
        Self {
            exchange,
            clock,
            slot: RwLock::new(None),
        }
    }

    /// Current credential, valid or not
    #[cfg(test)]
    pub(crate) fn cached(&self) -> Option<Credential> {
        self.slot.read().clone()
    }

    /// Drop the cached credential so the next call re-authenticates
    pub fn invalidate(&self) {
        *self.slot.write() = None;
    }

    /// Invalidate when the API rejected the cached token. Returns whether it did.
    pub fn invalidate_on_unauthorized(&self, error: &IgdbError) -> bool {
        if !error.is_unauthorized() {
            return false;
        }
        tracing::debug!("IGDB rejected the cached token, dropping it");
        self.invalidate();
        true
    }

    /// Return a valid token, refreshing it when absent or expired.
    ///
    /// Returns `None` when the exchange fails.
    pub async fn get_token(&self) -> Option<String> {
        let now = self.clock.now();
        let cached = self
            .slot
            .read()
            .as_ref()
            .filter(|credential| credential.is_valid_at(now))
            .map(|credential| credential.value.clone());
        if cached.is_some() {
            return cached;
        }

        match self.exchange.exchange().await {
            Ok(issued) if !issued.access_token.is_empty() => {
                let Some(expires_at) = self
                    .clock
                    .now()
                    .checked_add(Duration::from_secs(issued.expires_in))
                else {
                    tracing::warn!(
                        "Token expiry of {}s is out of range, ignoring token",
                        issued.expires_in
                    );
                    return None;
                };
                let credential = Credential {
                    value: issued.access_token,
                    expires_at,
                };
                tracing::debug!("Refreshed IGDB token, valid for {}s", issued.expires_in);
                let value = credential.value.clone();
                *self.slot.write() = Some(credential);
                Some(value)
            }
            Ok(_) => {
                tracing::warn!("Token exchange returned an empty access token");
                None
            }
            Err(e) => {
                tracing::warn!("Token exchange failed: {}", e);
                None
            }
        }
    }
}
