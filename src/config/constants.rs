use std::time::Duration;

pub const APP_NAME: &str = "smallfeishu";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "FEISHU_CONFIG_PATH";

pub const FEISHU_SECTION: &str = "feishu";
pub const NOTIFICATIONS_SECTION: &str = "notifications";

pub const FEISHU_DOMAIN: &str = "feishu.cn";
pub const WEBHOOK_HOOK_PATH: &str = "/open-apis/bot/v2/hook/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub const MASK_SHORT_URL_MAX_LEN: usize = 50;
pub const MASK_SHORT_KEEP: (usize, usize) = (10, 10);
pub const MASK_LONG_KEEP: (usize, usize) = (20, 15);

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
