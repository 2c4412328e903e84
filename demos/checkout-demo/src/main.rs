//! Demo walkthrough of the Viva Wallet client against the sandbox
//! environment.
//!
//! Expects credentials in the environment:
//! - `VIVA_CLIENT_ID` / `VIVA_CLIENT_SECRET` for the OAuth client
//! - `VIVA_MERCHANT_ID` / `VIVA_API_KEY` for the basic auth client

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use viva_wallet::{BasicAuthClient, CheckoutOrder, Config, OAuthClient, UpdateOrderPayment};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,viva_wallet=debug")
        }))
        .init();

    let client_id = std::env::var("VIVA_CLIENT_ID").context("VIVA_CLIENT_ID not set")?;
    let client_secret = std::env::var("VIVA_CLIENT_SECRET").context("VIVA_CLIENT_SECRET not set")?;
    let merchant_id = std::env::var("VIVA_MERCHANT_ID").context("VIVA_MERCHANT_ID not set")?;
    let api_key = std::env::var("VIVA_API_KEY").context("VIVA_API_KEY not set")?;

    // One transport, shared by both clients.
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let oauth = OAuthClient::with_http_client(http.clone(), client_id, client_secret, Config::demo());
    let basic = BasicAuthClient::with_http_client(http, merchant_id, api_key, Config::demo());

    let token = oauth.authenticate().await?;
    info!(token_type = %token.token_type, expires_in = token.expires_in, "authenticated");

    let order = CheckoutOrder {
        amount: 1000,
        customer_trns: Some("demo order".into()),
        preauth: Some(true),
        ..CheckoutOrder::default()
    };
    let created = oauth.create_order_payment(&order).await?;
    info!(order_code = created.order_code, "order payment created");

    match basic.get_wallets().await {
        Ok(wallets) => {
            for wallet in &wallets {
                info!(
                    wallet_id = wallet.wallet_id,
                    name = %wallet.friendly_name,
                    available = wallet.available,
                    currency = %wallet.currency_code,
                    "wallet"
                );
            }
        }
        Err(err) => warn!(error = %err, "listing wallets failed"),
    }

    let update = UpdateOrderPayment {
        amount: Some(1200),
        ..UpdateOrderPayment::default()
    };
    if let Err(err) = basic.update_order_payment(created.order_code, &update).await {
        warn!(error = %err, "updating the order failed");
    }

    match basic.get_order_payment(created.order_code).await {
        Ok(order) => info!(
            order_code = order.order_code,
            amount = order.request_amount,
            state = order.state_id,
            "order payment state"
        ),
        Err(err) => warn!(error = %err, "fetching the order failed"),
    }

    let cancelled = basic.cancel_order_payment(created.order_code).await?;
    info!(
        order_code = cancelled.order_code,
        state = cancelled.state_id,
        "order payment cancelled"
    );

    Ok(())
}
