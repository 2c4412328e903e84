//! Merchant wallets and balance transfers (`app` origin, basic auth)

use serde::{Deserialize, Serialize};

use crate::client::BasicAuthClient;
use crate::config::Config;
use crate::error::Result;

/// A merchant wallet. The legacy API answers with PascalCase JSON and
/// amounts in major currency units.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wallet {
    pub iban: String,
    pub wallet_id: i64,
    pub is_primary: bool,
    pub amount: f64,
    pub available: f64,
    pub overdraft: f64,
    pub friendly_name: String,
    pub currency_code: String,
}

/// Payload for moving money between two of the merchant's wallets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTransfer {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_transaction_id: Option<String>,
}

/// The debit/credit transaction pair created by a balance transfer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceTransferResponse {
    pub debit_transaction_id: String,
    pub credit_transaction_id: String,
}

impl BasicAuthClient {
    /// List all wallets of the authenticated merchant.
    pub async fn get_wallets(&self) -> Result<Vec<Wallet>> {
        let url = wallets_url(&self.config);
        self.executor.get(&url).await
    }

    /// Transfer balance from `wallet_id` to `target_wallet_id`.
    pub async fn balance_transfer(
        &self,
        wallet_id: &str,
        target_wallet_id: &str,
        transfer: &BalanceTransfer,
    ) -> Result<BalanceTransferResponse> {
        let url = format!(
            "{}/api/wallets/{wallet_id}/balancetransfer/{target_wallet_id}",
            self.config.app_base()
        );
        self.executor.post(&url, transfer).await
    }
}

fn wallets_url(config: &Config) -> String {
    format!("{}/api/wallets", config.app_base())
}
