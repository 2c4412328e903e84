//! Transaction lookups and the deprecated transaction operations
//!
//! `get_transaction` lives on the checkout `api` origin (bearer auth);
//! `create_transaction`/`cancel_transaction` are legacy `app`-origin
//! operations (basic auth) kept for merchants still on the old APIs.

use serde::{Deserialize, Serialize};

use crate::client::{BasicAuthClient, OAuthClient};
use crate::config::Config;
use crate::error::Result;

/// A transaction as returned by the checkout API.
///
/// `ins_date` is kept as the raw timestamp string; the legacy and
/// checkout APIs do not agree on a format.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    #[serde(default)]
    pub email: Option<String>,
    pub amount: i64,
    pub order_code: String,
    pub status_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub ins_date: Option<String>,
    #[serde(default)]
    pub card_number: Option<String>,
    pub currency_code: i32,
    #[serde(default)]
    pub customer_trns: Option<String>,
    #[serde(default)]
    pub merchant_trns: Option<String>,
    pub transaction_type_id: i32,
    #[serde(default)]
    pub recurring_support: bool,
    #[serde(default)]
    pub total_installments: i32,
    #[serde(default)]
    pub card_country_code: Option<String>,
    #[serde(default)]
    pub card_issuing_bank: Option<String>,
    #[serde(default)]
    pub current_installment: i32,
    #[serde(default)]
    pub card_unique_reference: Option<String>,
    #[serde(default)]
    pub card_type_id: i32,
    #[serde(default)]
    pub digital_wallet_id: i32,
}

/// Payload for a recurring charge against an existing transaction
/// (deprecated `app` API).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_trns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_trns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
}

/// Result of a deprecated `app`-origin transaction operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyTransactionResponse {
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub status_id: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_text: Option<String>,
    #[serde(default)]
    pub time_stamp: Option<String>,
    #[serde(default)]
    pub success: bool,
}

impl OAuthClient {
    /// Retrieve a checkout transaction by its ID.
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<TransactionResponse> {
        let url = get_transaction_url(&self.config, transaction_id);
        self.executor.get(&url).await
    }
}

impl BasicAuthClient {
    /// Charge a customer again based on an existing recurring-enabled
    /// transaction (deprecated API).
    pub async fn create_transaction(
        &self,
        transaction_id: &str,
        payload: &CreateTransaction,
    ) -> Result<LegacyTransactionResponse> {
        let url = legacy_transaction_url(&self.config, transaction_id);
        self.executor.post(&url, payload).await
    }

    /// Cancel or refund `amount` of a card payment (deprecated API).
    /// `amount` is in the currency's minor unit.
    pub async fn cancel_transaction(
        &self,
        transaction_id: &str,
        amount: i64,
        source_code: &str,
    ) -> Result<LegacyTransactionResponse> {
        let url = format!(
            "{}?amount={amount}&sourceCode={source_code}",
            legacy_transaction_url(&self.config, transaction_id)
        );
        self.executor.delete(&url).await
    }
}

fn get_transaction_url(config: &Config, transaction_id: &str) -> String {
    format!(
        "{}/checkout/v2/transactions/{transaction_id}",
        config.api_base()
    )
}

fn legacy_transaction_url(config: &Config, transaction_id: &str) -> String {
    format!("{}/api/transactions/{transaction_id}", config.app_base())
}
