//! Client construction for the two auth flavors
//!
//! Both clients own their credentials for their whole lifetime and share
//! one request executor; they differ only in how credentials are attached.
//! The HTTP transport is owned per client instance and injectable, so
//! callers can share a connection pool deliberately instead of through
//! hidden process-wide state.

use std::sync::Arc;
use std::time::Duration;

use common::Secret;
use tracing::debug;

use crate::auth::basic_credentials;
use crate::config::Config;
use crate::request::{AuthScheme, Executor};
use crate::token::TokenCache;

/// Default timeout applied to every request, authentication included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the checkout/acquiring APIs (`api` origin), authenticated
/// with an OAuth2 client-credentials bearer token.
///
/// Cheap to share behind an `Arc`; all concurrent requests observe the
/// same token cache.
pub struct OAuthClient {
    pub(crate) config: Config,
    pub(crate) http: reqwest::Client,
    pub(crate) client_id: String,
    pub(crate) client_secret: Secret<String>,
    pub(crate) cache: Arc<TokenCache>,
    pub(crate) executor: Executor,
}

impl OAuthClient {
    /// Create a client with its own transport (60 s timeout).
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: Config,
    ) -> Self {
        Self::with_http_client(default_http_client(), client_id, client_secret, config)
    }

    /// Create a client on an existing `reqwest::Client`, sharing its
    /// connection pool and timeout settings.
    pub fn with_http_client(
        http: reqwest::Client,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: Config,
    ) -> Self {
        let client_id = client_id.into();
        let cache = Arc::new(TokenCache::new());
        let executor = Executor::new(http.clone(), AuthScheme::Bearer(Arc::clone(&cache)));
        debug!(client_id, demo = config.is_demo(), "oauth client created");
        Self {
            config,
            http,
            client_id,
            client_secret: Secret::new(client_secret.into()),
            cache,
            executor,
        }
    }

    /// Environment configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Client for the legacy `app`-origin APIs (wallets, balance transfers,
/// deprecated order/transaction endpoints), authenticated with HTTP Basic
/// auth from a merchant ID and API key.
pub struct BasicAuthClient {
    pub(crate) config: Config,
    pub(crate) executor: Executor,
}

impl BasicAuthClient {
    /// Create a client with its own transport (60 s timeout).
    pub fn new(
        merchant_id: impl Into<String>,
        api_key: impl Into<String>,
        config: Config,
    ) -> Self {
        Self::with_http_client(default_http_client(), merchant_id, api_key, config)
    }

    /// Create a client on an existing `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        merchant_id: impl Into<String>,
        api_key: impl Into<String>,
        config: Config,
    ) -> Self {
        let merchant_id = merchant_id.into();
        let api_key: Secret<String> = api_key.into().into();
        let credentials = basic_credentials(&merchant_id, api_key.expose());
        let executor = Executor::new(http, AuthScheme::Basic(credentials));
        debug!(merchant_id, demo = config.is_demo(), "basic auth client created");
        Self { config, executor }
    }

    /// Environment configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn default_http_client() -> reqwest::Client {
    // A builder carrying only a timeout cannot fail to build; fall back to
    // the default client rather than panic if reqwest ever disagrees.
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oauth_client_starts_unauthenticated() {
        let client = OAuthClient::new("id", "secret", Config::demo());
        assert!(client.has_auth_expired());
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn clients_expose_their_config() {
        let oauth = OAuthClient::new("id", "secret", Config::demo());
        assert!(oauth.config().is_demo());

        let basic = BasicAuthClient::new("merchant", "key", Config::production());
        assert!(!basic.config().is_demo());
    }
}
