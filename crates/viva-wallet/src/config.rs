//! Environment selection and base URL resolution
//!
//! Viva exposes three origins, each with a demo and a production host:
//! the accounts origin (token endpoint), the checkout/acquiring `api`
//! origin, and the legacy `app` origin used by the deprecated wallet,
//! order and transaction endpoints. The demo flag picks the host set;
//! individual bases can be overridden, which is how the test suite points
//! a client at a local mock server.

/// Production token endpoint origin.
pub const ACCOUNTS_BASE: &str = "https://accounts.vivapayments.com";
/// Demo token endpoint origin.
pub const DEMO_ACCOUNTS_BASE: &str = "https://demo-accounts.vivapayments.com";

/// Production checkout/acquiring API origin.
pub const API_BASE: &str = "https://api.vivapayments.com";
/// Demo checkout/acquiring API origin.
pub const DEMO_API_BASE: &str = "https://demo-api.vivapayments.com";

/// Production legacy `app` origin.
pub const APP_BASE: &str = "https://www.vivapayments.com";
/// Demo legacy `app` origin.
pub const DEMO_APP_BASE: &str = "https://demo.vivapayments.com";

/// Client environment configuration.
///
/// Immutable after the client is constructed. Holds only the demo flag and
/// optional per-origin base overrides — credentials live on the clients.
#[derive(Debug, Clone)]
pub struct Config {
    demo: bool,
    accounts_base: Option<String>,
    api_base: Option<String>,
    app_base: Option<String>,
}

impl Config {
    /// Configuration for the given environment (`demo = true` selects the
    /// sandbox hosts).
    pub fn new(demo: bool) -> Self {
        Self {
            demo,
            accounts_base: None,
            api_base: None,
            app_base: None,
        }
    }

    /// Sandbox environment configuration.
    pub fn demo() -> Self {
        Self::new(true)
    }

    /// Production environment configuration.
    pub fn production() -> Self {
        Self::new(false)
    }

    /// Whether this configuration targets the demo environment.
    pub fn is_demo(&self) -> bool {
        self.demo
    }

    /// Override the token endpoint origin (no trailing slash).
    pub fn with_accounts_base(mut self, base: impl Into<String>) -> Self {
        self.accounts_base = Some(base.into());
        self
    }

    /// Override the checkout/acquiring API origin (no trailing slash).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Override the legacy `app` origin (no trailing slash).
    pub fn with_app_base(mut self, base: impl Into<String>) -> Self {
        self.app_base = Some(base.into());
        self
    }

    /// Token endpoint origin for this environment.
    pub fn accounts_base(&self) -> &str {
        match (&self.accounts_base, self.demo) {
            (Some(base), _) => base,
            (None, true) => DEMO_ACCOUNTS_BASE,
            (None, false) => ACCOUNTS_BASE,
        }
    }

    /// Checkout/acquiring API origin for this environment.
    pub fn api_base(&self) -> &str {
        match (&self.api_base, self.demo) {
            (Some(base), _) => base,
            (None, true) => DEMO_API_BASE,
            (None, false) => API_BASE,
        }
    }

    /// Legacy `app` origin for this environment.
    pub fn app_base(&self) -> &str {
        match (&self.app_base, self.demo) {
            (Some(base), _) => base,
            (None, true) => DEMO_APP_BASE,
            (None, false) => APP_BASE,
        }
    }
}
