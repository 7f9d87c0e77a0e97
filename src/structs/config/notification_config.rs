use std::time::Duration;
use serde::Serialize;
use crate::config::constants::timeout_duration;
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::webhook_target::WebhookTarget;

/// Validated Feishu settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    enabled: bool,
    webhooks: Vec<WebhookTarget>,
    timeout_secs: u64,
}

/// Display summary of a loaded configuration. Webhooks are masked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigInfo {
    pub enabled: bool,
    pub webhook_count: usize,
    pub webhooks: Vec<String>,
    pub timeout_secs: u64,
}

impl NotificationConfig {
    pub fn new(enabled: bool, webhooks: Vec<WebhookTarget>, timeout_secs: Option<u64>) -> Self {
        Self {
            enabled,
            webhooks,
            timeout_secs: timeout_secs.unwrap_or_else(ConfigHelper::default_timeout_secs),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Raw webhook URLs, as an owned copy.
    pub fn webhooks(&self) -> Vec<String> {
        self.webhooks.iter().map(|w| w.as_str().to_string()).collect()
    }

    pub fn masked_webhooks(&self) -> Vec<String> {
        self.webhooks.iter().map(WebhookTarget::masked).collect()
    }

    pub fn timeout(&self) -> Duration {
        timeout_duration(self.timeout_secs)
    }

    pub fn config_info(&self) -> ConfigInfo {
        ConfigInfo {
            enabled: self.enabled,
            webhook_count: self.webhooks.len(),
            webhooks: self.masked_webhooks(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NotificationConfig {
        let target = WebhookTarget::parse("https://open.feishu.cn/open-apis/bot/v2/hook/abc").unwrap();
        NotificationConfig::new(true, vec![target], None)
    }

    #[test]
    fn test_webhooks_returns_independent_copy() {
        let config = sample();
        let mut copy = config.webhooks();
        copy.push("https://evil.example".to_string());
        copy[0].clear();

        assert_eq!(config.webhooks().len(), 1);
        assert!(config.webhooks()[0].ends_with("/hook/abc"));
    }

    #[test]
    fn test_default_timeout_and_info() {
        let config = sample();
        assert_eq!(config.timeout(), Duration::from_secs(10));

        let info = config.config_info();
        assert!(info.enabled);
        assert_eq!(info.webhook_count, 1);
        assert_eq!(info.webhooks, config.masked_webhooks());
        assert!(!info.webhooks[0].contains("/bot/v2/"));
    }
}
