//! Token endpoint wire type and the in-process token cache
//!
//! The cache holds the one live access token per
//! [`OAuthClient`](crate::client::OAuthClient). A token and its expiry
//! are published together as
//! one immutable value: writers build a new `Arc` and swap it in, readers
//! clone the `Arc`. A reader can never observe a token string paired with
//! an expiry from a different write.
//!
//! The `RwLock` is only ever held for the pointer swap or clone — no I/O
//! or decoding happens under the lock.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Response from the token endpoint for the client-credentials grant.
///
/// `expires_in` is a delta in seconds from the response time. The client
/// converts it to an absolute instant when caching the token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Seconds until the access token expires (delta, not absolute)
    pub expires_in: u64,
    pub token_type: String,
    #[serde(default)]
    pub scope: Option<String>,
}

/// An access token paired with its absolute expiry.
///
/// Immutable once published; re-authentication replaces the whole value.
#[derive(Debug)]
pub(crate) struct CachedToken {
    pub(crate) access_token: String,
    pub(crate) expires_at: Instant,
}

/// Single-writer/many-readers cache for the live token.
///
/// `None` means never authenticated, which counts as expired.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    current: RwLock<Option<Arc<CachedToken>>>,
}

impl TokenCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Most recently published token, if any. Never blocks on I/O.
    pub(crate) fn current(&self) -> Option<Arc<CachedToken>> {
        self.read_guard().clone()
    }

    /// Atomically replace the cached token and expiry together.
    pub(crate) fn store(&self, access_token: String, expires_at: Instant) {
        let token = Arc::new(CachedToken {
            access_token,
            expires_at,
        });
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(token);
    }

    /// Whether the cached token has expired (or was never obtained).
    pub(crate) fn has_expired(&self) -> bool {
        self.expired_at(Instant::now())
    }

    fn expired_at(&self, now: Instant) -> bool {
        match self.read_guard().as_deref() {
            Some(token) => now >= token.expires_at,
            None => true,
        }
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Option<Arc<CachedToken>>> {
        // A poisoned lock still holds a fully-published value, so recover
        // rather than propagate the panic of an unrelated thread.
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn token_response_deserializes_without_scope() {
        let json = r#"{"access_token":"tok1","expires_in":3600,"token_type":"Bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "tok1");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.scope, None);
    }

    #[test]
    fn token_response_deserializes_with_scope() {
        let json = r#"{"access_token":"tok1","expires_in":299,"token_type":"Bearer","scope":"urn:viva:payments"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.scope.as_deref(), Some("urn:viva:payments"));
    }

    #[test]
    fn never_authenticated_counts_as_expired() {
        let cache = TokenCache::new();
        assert!(cache.has_expired());
        assert!(cache.current().is_none());
    }

    #[test]
    fn expiry_follows_the_stored_instant() {
        let cache = TokenCache::new();
        let now = Instant::now();
        cache.store("tok1".into(), now + Duration::from_secs(30));

        // Simulated clock: fresh before the deadline, expired at and after it.
        assert!(!cache.expired_at(now));
        assert!(!cache.expired_at(now + Duration::from_secs(29)));
        assert!(cache.expired_at(now + Duration::from_secs(30)));
        assert!(cache.expired_at(now + Duration::from_secs(31)));
    }

    #[test]
    fn store_replaces_the_whole_value() {
        let cache = TokenCache::new();
        let now = Instant::now();
        cache.store("tok1".into(), now + Duration::from_secs(10));
        cache.store("tok2".into(), now + Duration::from_secs(20));

        let current = cache.current().unwrap();
        assert_eq!(current.access_token, "tok2");
        assert_eq!(current.expires_at, now + Duration::from_secs(20));
    }

    #[test]
    fn concurrent_readers_never_see_a_torn_pair() {
        // Writers publish (tok{i}, base + i seconds); a read is consistent
        // iff the token suffix matches the expiry offset.
        let cache = Arc::new(TokenCache::new());
        let base = Instant::now() + Duration::from_secs(3600);

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for round in 0..250u64 {
                        let i = w * 1000 + round;
                        cache.store(format!("tok{i}"), base + Duration::from_secs(i));
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        if let Some(token) = cache.current() {
                            let i: u64 = token
                                .access_token
                                .strip_prefix("tok")
                                .and_then(|s| s.parse().ok())
                                .expect("token format");
                            assert_eq!(
                                token.expires_at,
                                base + Duration::from_secs(i),
                                "token {i} paired with wrong expiry"
                            );
                        }
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
    }
}
