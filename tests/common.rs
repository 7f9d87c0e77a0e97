use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use tempfile::NamedTempFile;
use smallfeishu::enums::delivery_failure::DeliveryFailure;
use smallfeishu::structs::transport_response::TransportResponse;
use smallfeishu::traits::webhook_transport::WebhookTransport;

pub const HOOK_1: &str = "https://open.feishu.cn/open-apis/bot/v2/hook/test-token-1";
pub const HOOK_2: &str = "https://open.feishu.cn/open-apis/bot/v2/hook/test-token-2";

pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Records every request and answers from a per-URL script.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Result<TransportResponse, DeliveryFailure>>,
    pub calls: Mutex<Vec<(String, String, Duration)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, response: Result<TransportResponse, DeliveryFailure>) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl WebhookTransport for FakeTransport {
    async fn post_json(&self, url: &str, body: &str, timeout: Duration) -> Result<TransportResponse, DeliveryFailure> {
        self.calls.lock().unwrap().push((url.to_string(), body.to_string(), timeout));
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(DeliveryFailure::Connection(format!("no route to {}", url))))
    }
}
