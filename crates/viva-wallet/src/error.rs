//! Error types for client operations
//!
//! One taxonomy covers both client flavors. Nothing is retried by the
//! library; every variant surfaces to the caller, who owns retry policy.

/// Errors from Viva Wallet API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure (connection refused, DNS, timeout). The
    /// request may or may not have reached the server.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The token endpoint answered with a non-200 status.
    #[error("authentication failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    /// The cached access token has expired or was never obtained. Call
    /// [`OAuthClient::authenticate`](crate::OAuthClient::authenticate)
    /// and retry. Raised before any HTTP is issued.
    #[error("access token expired, authenticate before retrying")]
    AuthExpired,

    /// An API endpoint answered with a non-200 status. `body` is a raw
    /// snippet of the response, not parsed as JSON.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// A 200 response body was not valid JSON, or did not match the
    /// expected shape (also covers failing to encode a request payload).
    #[error("decode failure: {0}")]
    Decode(String),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_carries_the_code() {
        let err = Error::Status {
            status: 503,
            body: "upstream unavailable".into(),
        };
        assert_eq!(err.to_string(), "request failed with status 503");
    }

    #[test]
    fn authentication_display_carries_status_and_body() {
        let err = Error::Authentication {
            status: 400,
            body: "invalid_client".into(),
        };
        assert_eq!(
            err.to_string(),
            "authentication failed with status 400: invalid_client"
        );
    }

    #[test]
    fn debug_includes_variant_name() {
        let debug = format!("{:?}", Error::AuthExpired);
        assert!(debug.contains("AuthExpired"), "got: {debug}");
    }
}
