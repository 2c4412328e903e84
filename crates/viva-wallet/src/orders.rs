//! Deprecated order payment operations (`app` origin, basic auth)
//!
//! The legacy orders API predates Smart Checkout and answers with
//! PascalCase JSON. Updates are fire-and-forget: the PATCH response body
//! is not decoded.

use serde::{Deserialize, Serialize};

use crate::client::BasicAuthClient;
use crate::config::Config;
use crate::error::Result;

/// An order payment as returned by the legacy orders API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderPayment {
    pub order_code: i64,
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub request_amount: f64,
    #[serde(default)]
    pub customer_trns: Option<String>,
    #[serde(default)]
    pub merchant_trns: Option<String>,
    #[serde(default)]
    pub tip_amount: f64,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub state_id: i32,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// Partial update of a pending order payment. Unset fields are left
/// unchanged by the API.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_trns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_trns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_paid_state: Option<bool>,
}

impl BasicAuthClient {
    /// Retrieve a pending order payment by its order code.
    pub async fn get_order_payment(&self, order_code: i64) -> Result<OrderPayment> {
        let url = order_url(&self.config, order_code);
        self.executor.get(&url).await
    }

    /// Update a pending order payment. The response body is discarded.
    pub async fn update_order_payment(
        &self,
        order_code: i64,
        update: &UpdateOrderPayment,
    ) -> Result<()> {
        let url = order_url(&self.config, order_code);
        self.executor.patch(&url, update).await
    }

    /// Cancel a pending order payment and return its final state.
    pub async fn cancel_order_payment(&self, order_code: i64) -> Result<OrderPayment> {
        let url = order_url(&self.config, order_code);
        self.executor.delete(&url).await
    }
}

fn order_url(config: &Config, order_code: i64) -> String {
    format!("{}/api/orders/{order_code}", config.app_base())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BasicAuthClient {
        BasicAuthClient::new(
            "merchant",
            "key",
            Config::demo().with_app_base(server.uri()),
        )
    }

    #[tokio::test]
    async fn get_order_payment_decodes_the_pascal_case_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders/1272214778972604"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "OrderCode": 1272214778972604i64,
                "SourceCode": "Default",
                "RequestAmount": 12.0,
                "CustomerTrns": "order #42",
                "StateId": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client_for(&server)
            .get_order_payment(1272214778972604)
            .await
            .unwrap();
        assert_eq!(order.order_code, 1272214778972604);
        assert_eq!(order.source_code.as_deref(), Some("Default"));
        assert_eq!(order.request_amount, 12.0);
        assert_eq!(order.state_id, 0);
    }

    #[tokio::test]
    async fn update_order_payment_ignores_the_response_body() {
        let server = MockServer::start().await;
        // Legacy PATCH answers with a body that is not JSON; the binding
        // must succeed anyway.
        Mock::given(method("PATCH"))
            .and(path("/api/orders/42"))
            .and(body_json(serde_json::json!({"amount": 1200})))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let update = UpdateOrderPayment {
            amount: Some(1200),
            ..UpdateOrderPayment::default()
        };
        client_for(&server)
            .update_order_payment(42, &update)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn cancel_order_payment_decodes_the_final_state() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/orders/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "OrderCode": 42,
                "StateId": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client_for(&server).cancel_order_payment(42).await.unwrap();
        assert_eq!(order.order_code, 42);
        assert_eq!(order.state_id, 2);
    }
}
