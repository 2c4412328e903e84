//! Request executor shared by both client flavors
//!
//! One implementation builds, sends and decodes every API request; the
//! [`AuthScheme`] decides how credentials are attached. The bearer scheme
//! checks token expiry before a request is even built, so an expired
//! token fails the call with [`Error::AuthExpired`] without any HTTP
//! reaching the wire.
//!
//! Status handling is uniform: only 200 is a success. Non-200 bodies are
//! carried as an unparsed snippet — the legacy APIs in particular return
//! error bodies in no consistent format.

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Method, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::token::TokenCache;

/// Longest non-200 body snippet carried on [`Error::Status`].
const SNIPPET_MAX: usize = 512;

/// Credential attachment strategy.
pub(crate) enum AuthScheme {
    /// `Authorization: Bearer <token>` from the shared token cache,
    /// preceded by a proactive expiry check.
    Bearer(Arc<TokenCache>),
    /// `Authorization: Basic <credentials>` with a precomputed
    /// `base64(merchant_id:api_key)` value. No expiry concept.
    Basic(String),
}

/// Sends API requests with uniform credential, status and decode handling.
pub(crate) struct Executor {
    http: reqwest::Client,
    scheme: AuthScheme,
}

impl Executor {
    pub(crate) fn new(http: reqwest::Client, scheme: AuthScheme) -> Self {
        Self { http, scheme }
    }

    /// GET with a decoded JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.dispatch(Method::GET, url, None).await?;
        decode(&body)
    }

    /// POST with a JSON payload and a decoded JSON response.
    pub(crate) async fn post<B, T>(&self, url: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.dispatch(Method::POST, url, Some(encode(payload)?)).await?;
        decode(&body)
    }

    /// PATCH with a JSON payload; the response body is discarded.
    pub(crate) async fn patch<B>(&self, url: &str, payload: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(Method::PATCH, url, Some(encode(payload)?))
            .await?;
        Ok(())
    }

    /// DELETE with a decoded JSON response (the legacy cancel endpoints
    /// pass their arguments in the query string, not a body).
    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.dispatch(Method::DELETE, url, None).await?;
        decode(&body)
    }

    /// Attach credentials, send, and return the raw body of a 200
    /// response. All verbs funnel through here.
    async fn dispatch(&self, method: Method, url: &str, payload: Option<String>) -> Result<String> {
        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(header::CONTENT_TYPE, "application/json");
        builder = self.attach_credentials(builder)?;
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }

        debug!(%method, %url, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("reading response from {url} failed: {e}")))?;

        if status.as_u16() != 200 {
            warn!(%method, %url, status = status.as_u16(), "request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                body: snippet(body),
            });
        }

        Ok(body)
    }

    fn attach_credentials(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        match &self.scheme {
            AuthScheme::Bearer(cache) => {
                // Proactive expiry check: fail before any HTTP is issued.
                // The caller re-authenticates explicitly and retries.
                // Token and freshness come from the same snapshot, so a
                // racing re-authentication cannot pair a stale token with
                // a fresh expiry verdict.
                match cache.current() {
                    Some(token) if Instant::now() < token.expires_at => Ok(builder.header(
                        header::AUTHORIZATION,
                        format!("Bearer {}", token.access_token),
                    )),
                    _ => Err(Error::AuthExpired),
                }
            }
            AuthScheme::Basic(credentials) => Ok(builder.header(
                header::AUTHORIZATION,
                format!("Basic {credentials}"),
            )),
        }
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<String> {
    serde_json::to_string(payload)
        .map_err(|e| Error::Decode(format!("failed to encode request payload: {e}")))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Decode(format!("unexpected response shape: {e}")))
}

fn snippet(body: String) -> String {
    if body.len() <= SNIPPET_MAX {
        return body;
    }
    let mut end = SNIPPET_MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
