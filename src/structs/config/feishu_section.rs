use serde::Deserialize;
use crate::helpers::config_helper::ConfigHelper;

/// The `[feishu]` / `[notifications.feishu]` table as written on disk.
#[derive(Debug, Deserialize, Clone)]
pub struct FeishuSection {
    #[serde(default = "ConfigHelper::default_enabled")]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_webhooks")]
    pub webhooks: Vec<String>,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout: Option<u64>,
}
