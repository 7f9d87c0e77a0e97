use std::fmt;
use url::Url;
use crate::config::constants::{FEISHU_DOMAIN, WEBHOOK_HOOK_PATH};
use crate::errors::{FeishuError, FeishuResult};
use crate::helpers::mask_helper::MaskHelper;

/// A Feishu bot webhook URL that passed shape validation.
///
/// `Display` renders the masked form; the raw URL is only reachable
/// through [`WebhookTarget::as_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTarget(String);

impl WebhookTarget {
    pub fn parse(url: &str) -> FeishuResult<Self> {
        if Self::is_valid(url) {
            Ok(Self(url.to_string()))
        } else {
            Err(FeishuError::InvalidWebhook { url: url.to_string() })
        }
    }

    /// True iff the scheme is exactly `https`, the host contains the
    /// Feishu domain and the path contains the bot hook segment.
    pub fn is_valid(url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => {
                parsed.scheme() == "https"
                    && parsed.host_str().is_some_and(|host| host.contains(FEISHU_DOMAIN))
                    && parsed.path().contains(WEBHOOK_HOOK_PATH)
            }
            Err(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn masked(&self) -> String {
        MaskHelper::mask_webhook(&self.0)
    }
}

impl fmt::Display for WebhookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}
