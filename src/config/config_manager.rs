use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, FEISHU_SECTION, NOTIFICATIONS_SECTION};
use crate::errors::{FeishuError, FeishuResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::feishu_section::FeishuSection;
use crate::structs::config::notification_config::NotificationConfig;
use crate::structs::webhook_target::WebhookTarget;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads and validates the Feishu configuration.
    ///
    /// With no explicit path the file is discovered through
    /// [`ConfigManager::config_path`].
    pub fn load(path: Option<&Path>) -> FeishuResult<NotificationConfig> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if !config_path.exists() {
            return Err(FeishuError::ConfigurationFileNotFound {
                path: config_path.display().to_string(),
            });
        }

        log::debug!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)
            .map_err(|e| FeishuError::file_error(&config_path.display().to_string(), &e.to_string()))?;

        Self::parse(&content, &config_path)
    }

    /// Parses config text. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> FeishuResult<NotificationConfig> {
        let document: toml::Value = toml::from_str(content).map_err(|e| {
            FeishuError::file_error(&origin.display().to_string(), &format!("invalid TOML: {}", e.message()))
        })?;

        let section_value = Self::locate_feishu_section(&document).ok_or_else(|| {
            FeishuError::config_error(
                "missing Feishu section: [feishu] or [notifications.feishu]",
                Some("Add a [feishu] table with 'enabled' and 'webhooks'"),
            )
        })?;

        let section: FeishuSection = section_value
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| {
                FeishuError::file_error(&origin.display().to_string(), &format!("invalid Feishu section: {}", e.message()))
            })?;

        Self::validate_section(section)
    }

    /// Returns the first matching section: top-level `feishu`, then
    /// `notifications.feishu`.
    pub fn locate_feishu_section(document: &toml::Value) -> Option<&toml::Value> {
        document.get(FEISHU_SECTION).or_else(|| {
            document
                .get(NOTIFICATIONS_SECTION)
                .and_then(|notifications| notifications.get(FEISHU_SECTION))
        })
    }

    pub fn validate_section(section: FeishuSection) -> FeishuResult<NotificationConfig> {
        if section.enabled && section.webhooks.is_empty() {
            return Err(FeishuError::config_error(
                "at least one webhook is required when Feishu notifications are enabled",
                Some("Add a bot webhook to 'webhooks' or set 'enabled = false'"),
            ));
        }

        if section.timeout == Some(0) {
            return Err(FeishuError::config_error("'timeout' must be greater than 0", None));
        }

        let webhooks = section
            .webhooks
            .iter()
            .map(|url| WebhookTarget::parse(url))
            .collect::<FeishuResult<Vec<_>>>()?;

        log::debug!("Config validated: enabled={}, webhooks={}", section.enabled, webhooks.len());

        Ok(NotificationConfig::new(section.enabled, webhooks, section.timeout))
    }

    pub fn is_valid_webhook_url(url: &str) -> bool {
        WebhookTarget::is_valid(url)
    }

    /// Resolves the config file path from the process environment.
    pub fn config_path() -> PathBuf {
        let env_value = std::env::var(CONFIG_PATH_ENV).ok();
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::resolve_config_path(env_value.as_deref(), dirs::home_dir().as_deref(), &cwd)
    }

    /// Discovery order: `$FEISHU_CONFIG_PATH` (if the file exists), the
    /// per-user config file, then `./config.toml`. When none exists the
    /// per-user path is returned so errors can name it.
    pub fn resolve_config_path(env_value: Option<&str>, home: Option<&Path>, cwd: &Path) -> PathBuf {
        if let Some(env_path) = env_value.filter(|v| !v.is_empty()).map(PathBuf::from) {
            if env_path.exists() {
                log::debug!("Using config from ${}: {}", CONFIG_PATH_ENV, env_path.display());
                return env_path;
            }
        }

        let user_config = Self::user_config_file(home);
        if user_config.exists() {
            log::debug!("Using user config: {}", user_config.display());
            return user_config;
        }

        let local_config = cwd.join(CONFIG_FILE_NAME);
        if local_config.exists() {
            log::debug!("Using local config: {}", local_config.display());
            return local_config;
        }

        user_config
    }

    pub fn default_config_dir() -> PathBuf {
        Self::config_dir_in(dirs::home_dir().as_deref())
    }

    fn config_dir_in(home: Option<&Path>) -> PathBuf {
        home.map(|h| h.join(".config").join(APP_NAME)).unwrap_or_default()
    }

    fn user_config_file(home: Option<&Path>) -> PathBuf {
        Self::config_dir_in(home).join(CONFIG_FILE_NAME)
    }

    /// Writes the sample configuration into `dir`, creating it.
    pub fn create_sample_config(dir: &Path, force: bool) -> FeishuResult<PathBuf> {
        let config_file_path = dir.join(CONFIG_FILE_NAME);

        if config_file_path.exists() && !force {
            return Err(FeishuError::config_error(
                &format!("configuration file already exists: {}", config_file_path.display()),
                Some("Use 'feishu config init --force' to overwrite it"),
            ));
        }

        fs::create_dir_all(dir)?;
        fs::write(&config_file_path, ConfigHelper::sample_config())?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());

        Ok(config_file_path)
    }
}
