use std::error::Error as StdError;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use crate::config::constants::JSON_CONTENT_TYPE;
use crate::enums::delivery_failure::DeliveryFailure;
use crate::errors::{FeishuError, FeishuResult};
use crate::structs::transport_response::TransportResponse;
use crate::traits::webhook_transport::WebhookTransport;

#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> FeishuResult<Self> {
        // No idle connections survive a send.
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| FeishuError::system_error("building HTTP client", &e.to_string()))?;

        Ok(Self { client })
    }

    fn classify(error: reqwest::Error) -> DeliveryFailure {
        if error.is_timeout() {
            DeliveryFailure::Timeout
        } else if error.is_connect() {
            DeliveryFailure::Connection(Self::describe(error))
        } else {
            DeliveryFailure::Transport(Self::describe(error))
        }
    }

    /// Error text with its source chain. The request URL carries the bot
    /// token and is removed first.
    fn describe(error: reqwest::Error) -> String {
        let error = error.without_url();
        let mut text = error.to_string();

        let mut source = error.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }

        text
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &str, timeout: Duration) -> Result<TransportResponse, DeliveryFailure> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .timeout(timeout)
            .body(body.to_string())
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status().as_u16();
        log::debug!("HTTP response status: {}", status);

        let body = response.text().await.map_err(Self::classify)?;
        log::debug!("HTTP response body: {}", body);

        Ok(TransportResponse::new(status, body))
    }
}
