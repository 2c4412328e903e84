//! Smart Checkout order payments (`api` origin, bearer auth)

use serde::{Deserialize, Serialize};

use crate::client::OAuthClient;
use crate::config::Config;
use crate::error::Result;

/// Payload for creating a Smart Checkout order.
///
/// `amount` is in the currency's minor unit (e.g. cents). All other fields
/// are optional and omitted from the JSON when unset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOrder {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_trns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CheckoutCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preauth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_exact_amount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_cash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_wallet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_trns: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub card_tokens: Vec<String>,
}

/// Customer details attached to a checkout order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_lang: Option<String>,
}

/// Response to a created checkout order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOrderResponse {
    pub order_code: i64,
}

impl OAuthClient {
    /// Create a Smart Checkout order payment and return its `orderCode`.
    pub async fn create_order_payment(
        &self,
        order: &CheckoutOrder,
    ) -> Result<CheckoutOrderResponse> {
        let url = checkout_orders_url(&self.config);
        self.executor.post(&url, order).await
    }
}

fn checkout_orders_url(config: &Config) -> String {
    format!("{}/checkout/v2/orders", config.api_base())
}
