use std::time::Duration;
use async_trait::async_trait;
use crate::enums::delivery_failure::DeliveryFailure;
use crate::structs::transport_response::TransportResponse;

/// Posts a JSON body to a webhook URL.
///
/// Implementations map transport-level problems to
/// [`DeliveryFailure::Timeout`], [`DeliveryFailure::Connection`] or
/// [`DeliveryFailure::Transport`]; any HTTP response, whatever its status,
/// is returned as `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &str, timeout: Duration) -> Result<TransportResponse, DeliveryFailure>;
}
