//! Card tokenization (`api` origin, bearer auth)

use serde::{Deserialize, Serialize};

use crate::client::OAuthClient;
use crate::config::Config;
use crate::error::Result;

/// Payload for creating a card token from a completed transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardToken {
    pub transaction_id: String,
}

/// A stored card token, usable in later checkout orders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTokenResponse {
    pub token: String,
}

impl OAuthClient {
    /// Create a reusable card token from an existing transaction.
    pub async fn create_card_token(
        &self,
        payload: &CreateCardToken,
    ) -> Result<CardTokenResponse> {
        let url = card_tokens_url(&self.config);
        self.executor.post(&url, payload).await
    }
}

fn card_tokens_url(config: &Config) -> String {
    format!("{}/acquiring/v1/cards/tokens", config.api_base())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_card_token_round_trips_the_acquiring_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/acquiring/v1/cards/tokens"))
            .and(body_json(
                serde_json::json!({"transactionId": "trx-1"}),
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"token":"ct_4111"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = OAuthClient::new(
            "id",
            "secret",
            Config::demo().with_api_base(server.uri()),
        );
        client.set_token("tok1", Instant::now() + Duration::from_secs(60));

        let token = client
            .create_card_token(&CreateCardToken {
                transaction_id: "trx-1".into(),
            })
            .await
            .unwrap();
        assert_eq!(token.token, "ct_4111");
    }
}
