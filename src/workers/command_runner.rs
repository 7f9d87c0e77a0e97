use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{timeout_duration, APP_NAME};
use crate::enums::commands::Commands;
use crate::enums::config_action::ConfigAction;
use crate::enums::message_payload::MessagePayload;
use crate::errors::{FeishuError, FeishuResult};
use crate::logger::notification_logger::NotificationLogger;
use crate::services::feishu_notifier::FeishuNotifier;
use crate::structs::config::notification_config::NotificationConfig;
use crate::traits::webhook_transport::WebhookTransport;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    transport: Option<Arc<dyn WebhookTransport>>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            transport: None,
            start_time: None,
        }
    }

    /// Replaces the HTTP transport used by `send` and `test`.
    pub fn with_transport(mut self, transport: Arc<dyn WebhookTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub async fn run_command(&mut self, command: Commands) -> FeishuResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Send { message, markdown, timeout } => self.send_command(&message, markdown, timeout).await,
            Commands::Status => self.status_command(),
            Commands::Test { timeout } => self.test_command(timeout).await,
            Commands::Version => {
                Self::version_command();
                Ok(())
            }
            Commands::Config { action } => self.config_command(action),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn send_command(&self, message: &str, markdown: bool, timeout: Option<u64>) -> FeishuResult<()> {
        if message.trim().is_empty() {
            return Err(FeishuError::invalid_argument("message", "message must not be empty"));
        }

        let config = self.load_enabled_config()?;
        let notifier = self.build_notifier(&config, timeout)?;

        let payload = if markdown {
            FeishuNotifier::markdown_payload(message)?
        } else {
            FeishuNotifier::text_payload(message)?
        };

        log::info!("📤 Sending {} message to {} webhook(s)", payload.kind(), notifier.webhook_count());
        self.deliver(&notifier, &payload).await
    }

    async fn test_command(&self, timeout: Option<u64>) -> FeishuResult<()> {
        let config = self.load_enabled_config()?;
        let notifier = self.build_notifier(&config, timeout)?;

        let message = format!(
            "Feishu bot test message\nSent at: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let payload = FeishuNotifier::text_payload(&message)?;

        log::info!("🧪 Sending test message to {} webhook(s)", notifier.webhook_count());
        match self.deliver(&notifier, &payload).await {
            Ok(()) => {
                println!("✅ Test succeeded! The Feishu bot configuration works");
                Ok(())
            }
            Err(e) => {
                println!("❌ Test failed! Please check the configuration");
                Err(e)
            }
        }
    }

    fn status_command(&self) -> FeishuResult<()> {
        let path = self.resolved_config_path();
        let config = ConfigManager::load(Some(path.as_path()))?;

        print!("{}", NotificationLogger::render_config_info(&path.display().to_string(), &config.config_info()));
        println!();
        Ok(())
    }

    fn version_command() {
        println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
        println!("A small command-line tool for sending Feishu bot messages");
    }

    fn config_command(&self, action: ConfigAction) -> FeishuResult<()> {
        match action {
            ConfigAction::Show => {
                let path = self.resolved_config_path();
                let config = ConfigManager::load(Some(path.as_path()))?;
                let rendered = serde_json::to_string_pretty(&config.config_info())
                    .map_err(|e| FeishuError::system_error("rendering configuration", &e.to_string()))?;

                println!("📁 Config file: {}", path.display());
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Init { force } => {
                let written = ConfigManager::create_sample_config(&ConfigManager::default_config_dir(), force)?;
                println!("📁 Config file created: {}", written.display());
                println!("🔧 Replace YOUR_WEBHOOK_TOKEN_HERE with a real Feishu bot webhook");
                println!("🚀 Then run 'feishu test' to verify it");
                Ok(())
            }
            ConfigAction::Path => {
                let path = self.resolved_config_path();
                let state = if path.exists() { "exists" } else { "not found" };
                println!("{} ({})", path.display(), state);
                Ok(())
            }
        }
    }

    fn resolved_config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(ConfigManager::config_path)
    }

    fn load_enabled_config(&self) -> FeishuResult<NotificationConfig> {
        let path = self.resolved_config_path();
        log::info!("📋 Loading config from: {}", path.display());
        let config = ConfigManager::load(Some(path.as_path()))?;

        if !config.is_enabled() {
            return Err(FeishuError::config_error(
                "Feishu notifications are disabled",
                Some("Set 'enabled = true' in the [feishu] section"),
            ));
        }

        Ok(config)
    }

    fn build_notifier(&self, config: &NotificationConfig, timeout: Option<u64>) -> FeishuResult<FeishuNotifier> {
        let timeout: Duration = timeout.map_or_else(|| config.timeout(), timeout_duration);

        match &self.transport {
            Some(transport) => FeishuNotifier::with_transport(config.webhooks(), timeout, Arc::clone(transport)),
            None => FeishuNotifier::new(config.webhooks(), timeout),
        }
    }

    async fn deliver(&self, notifier: &FeishuNotifier, payload: &MessagePayload) -> FeishuResult<()> {
        let report = notifier.dispatch(payload).await?;
        NotificationLogger::log_report(&report);
        report.into_result().map(|_| ())
    }
}
