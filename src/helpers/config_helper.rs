use crate::config::constants::DEFAULT_TIMEOUT_SECS;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_enabled() -> bool {
        false
    }

    pub fn default_webhooks() -> Vec<String> {
        Vec::new()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn sample_config() -> &'static str {
        r#"# Feishu notification configuration
# Replace the placeholder token below with a real bot webhook.

[feishu]
# Turn Feishu notifications on or off
enabled = true

# Bot webhook list. To obtain one:
# 1. Add a bot to the Feishu group chat
# 2. Choose "Custom Bot"
# 3. Copy the generated webhook URL here
webhooks = [
    "https://open.feishu.cn/open-apis/bot/v2/hook/YOUR_WEBHOOK_TOKEN_HERE",
    # "https://open.feishu.cn/open-apis/bot/v2/hook/ANOTHER_WEBHOOK_TOKEN_HERE",
]

# Request timeout in seconds (optional, defaults to 10)
# timeout = 10
"#
    }
}
