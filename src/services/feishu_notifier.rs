use std::sync::Arc;
use std::time::Duration;
use futures::future::join_all;
use serde_json::Value;
use crate::enums::delivery_failure::DeliveryFailure;
use crate::enums::message_payload::MessagePayload;
use crate::errors::{FeishuError, FeishuResult};
use crate::helpers::mask_helper::MaskHelper;
use crate::helpers::message_formatter::MessageFormatter;
use crate::services::reqwest_transport::ReqwestTransport;
use crate::structs::delivery_report::{DeliveryOutcome, DeliveryReport};
use crate::structs::transport_response::TransportResponse;
use crate::traits::webhook_transport::WebhookTransport;

/// Sends messages to every configured Feishu bot webhook.
///
/// Each send attempts every webhook exactly once, concurrently, and only
/// reports after all attempts finished. Success means every webhook
/// accepted the message; anything less is a single aggregated
/// [`FeishuError::DeliveryFailed`].
#[derive(Clone)]
pub struct FeishuNotifier {
    webhooks: Vec<String>,
    timeout: Duration,
    transport: Arc<dyn WebhookTransport>,
}

impl FeishuNotifier {
    pub fn new(webhooks: Vec<String>, timeout: Duration) -> FeishuResult<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(webhooks, timeout, transport)
    }

    pub fn with_transport(
        webhooks: Vec<String>,
        timeout: Duration,
        transport: Arc<dyn WebhookTransport>,
    ) -> FeishuResult<Self> {
        if webhooks.is_empty() {
            return Err(FeishuError::invalid_argument("webhooks", "webhook list must not be empty"));
        }

        if timeout.is_zero() {
            return Err(FeishuError::invalid_argument("timeout", "timeout must be greater than 0"));
        }

        log::debug!(
            "Feishu notifier ready: {} webhook(s), timeout {}s",
            webhooks.len(),
            timeout.as_secs_f64()
        );

        Ok(Self {
            webhooks,
            timeout,
            transport,
        })
    }

    pub fn webhook_count(&self) -> usize {
        self.webhooks.len()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn send_text(&self, text: &str) -> FeishuResult<bool> {
        let payload = Self::text_payload(text)?;
        self.deliver_all(&payload).await
    }

    pub async fn send_markdown(&self, text: &str) -> FeishuResult<bool> {
        let payload = Self::markdown_payload(text)?;
        self.deliver_all(&payload).await
    }

    /// Sends a `post` message. `content` is the Feishu post document, e.g.
    /// `{"zh_cn": {"title": ..., "content": [[...]]}}`.
    pub async fn send_rich_text(&self, content: &Value) -> FeishuResult<bool> {
        let payload = Self::rich_text_payload(content)?;
        self.deliver_all(&payload).await
    }

    pub fn text_payload(text: &str) -> FeishuResult<MessagePayload> {
        Ok(MessagePayload::text(Self::normalized_text(text)?))
    }

    pub fn markdown_payload(text: &str) -> FeishuResult<MessagePayload> {
        Ok(MessagePayload::markdown(Self::normalized_text(text)?))
    }

    pub fn rich_text_payload(content: &Value) -> FeishuResult<MessagePayload> {
        let empty = match content {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        };

        if empty {
            return Err(FeishuError::invalid_argument("content", "rich text content must not be empty"));
        }

        Ok(MessagePayload::post(content.clone()))
    }

    fn normalized_text(text: &str) -> FeishuResult<String> {
        if text.trim().is_empty() {
            return Err(FeishuError::invalid_argument("text", "message must not be empty"));
        }

        Ok(MessageFormatter::format_text(text))
    }

    pub async fn deliver_all(&self, payload: &MessagePayload) -> FeishuResult<bool> {
        self.dispatch(payload).await?.into_result()
    }

    /// Attempts every webhook once and collects the per-target outcomes.
    pub async fn dispatch(&self, payload: &MessagePayload) -> FeishuResult<DeliveryReport> {
        let body = serde_json::to_string(payload)
            .map_err(|e| FeishuError::system_error("serializing message payload", &e.to_string()))?;

        let attempts = self
            .webhooks
            .iter()
            .enumerate()
            .map(|(index, url)| self.deliver_one(index, url, &body));

        Ok(DeliveryReport::new(join_all(attempts).await))
    }

    async fn deliver_one(&self, index: usize, url: &str, body: &str) -> DeliveryOutcome {
        let result = match self.transport.post_json(url, body, self.timeout).await {
            Ok(response) => Self::evaluate_response(&response),
            Err(failure) => Err(failure),
        };

        DeliveryOutcome {
            index,
            target: MaskHelper::mask_webhook(url),
            result,
        }
    }

    /// Decides whether a webhook accepted the message.
    ///
    /// Non-200 fails. A 200 body that is not JSON counts as accepted. A 200
    /// JSON body must be an object and fails when it carries a non-zero
    /// `code`.
    pub fn evaluate_response(response: &TransportResponse) -> Result<(), DeliveryFailure> {
        if response.status != 200 {
            return Err(DeliveryFailure::HttpStatus {
                status: response.status,
                body: response.body.clone(),
            });
        }

        let json = match serde_json::from_str::<Value>(&response.body) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("webhook answered 200 with a non-JSON body ({}), treating as success", e);
                return Ok(());
            }
        };

        let Some(object) = json.as_object() else {
            return Err(DeliveryFailure::UnexpectedBody(response.body.clone()));
        };

        match object.get("code") {
            None => Ok(()),
            Some(code) if code.as_f64() == Some(0.0) => Ok(()),
            Some(code) => {
                let code = match code {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                let msg = object
                    .get("msg")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();

                Err(DeliveryFailure::Api { code, msg })
            }
        }
    }
}
