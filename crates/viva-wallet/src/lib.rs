//! Viva Wallet REST API client
//!
//! Typed bindings for the Viva Wallet payment APIs with two client flavors:
//!
//! - [`OAuthClient`] — checkout/acquiring endpoints (`api` origin) using an
//!   OAuth2 client-credentials bearer token. The token is cached in-process
//!   and shared by all concurrent requests issued through one client.
//! - [`BasicAuthClient`] — legacy `app`-origin endpoints (wallets, balance
//!   transfers, deprecated order/transaction operations) using HTTP Basic
//!   auth with a merchant ID and API key.
//!
//! Token expiry is checked proactively: a call made with an expired (or
//! never obtained) token fails with [`Error::AuthExpired`] before any HTTP
//! is issued. The library never refreshes or retries on its own — callers
//! re-authenticate via [`OAuthClient::authenticate`] and retry themselves.
//!
//! ```no_run
//! use viva_wallet::{CheckoutOrder, Config, OAuthClient};
//!
//! # async fn run() -> viva_wallet::Result<()> {
//! let client = OAuthClient::new("client-id", "client-secret", Config::demo());
//! client.authenticate().await?;
//!
//! let order = CheckoutOrder {
//!     amount: 1000,
//!     ..CheckoutOrder::default()
//! };
//! let created = client.create_order_payment(&order).await?;
//! println!("order code: {}", created.order_code);
//! # Ok(())
//! # }
//! ```

pub mod cards;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod token;
pub mod transactions;
pub mod wallets;

mod auth;
mod request;

pub use cards::{CardTokenResponse, CreateCardToken};
pub use checkout::{CheckoutCustomer, CheckoutOrder, CheckoutOrderResponse};
pub use client::{BasicAuthClient, OAuthClient};
pub use config::Config;
pub use error::{Error, Result};
pub use orders::{OrderPayment, UpdateOrderPayment};
pub use token::TokenResponse;
pub use transactions::{CreateTransaction, LegacyTransactionResponse, TransactionResponse};
pub use wallets::{BalanceTransfer, BalanceTransferResponse, Wallet};
