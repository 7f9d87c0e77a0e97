use crate::enums::delivery_verdict::DeliveryVerdict;
use crate::structs::config::notification_config::ConfigInfo;
use crate::structs::delivery_report::DeliveryReport;

pub struct NotificationLogger {}

impl NotificationLogger {

    pub fn log_report(report: &DeliveryReport) {
        let total = report.total();

        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(()) => log::debug!("webhook {}/{} ({}) delivered", outcome.index + 1, total, outcome.target),
                Err(failure) => log::error!(
                    "webhook {}/{} ({}) failed: {}",
                    outcome.index + 1,
                    total,
                    outcome.target,
                    failure
                ),
            }
        }

        match report.verdict() {
            DeliveryVerdict::AllSucceeded => log::info!("✅ Message delivered to {} webhook(s)", total),
            DeliveryVerdict::PartialFailure { succeeded, total, .. } => {
                log::warn!("⚠️ Message delivered to {}/{} webhooks", succeeded, total)
            }
            DeliveryVerdict::AllFailed { .. } => log::error!("❌ Message was not delivered to any webhook"),
        }
    }

    /// Human-readable configuration summary, webhooks masked.
    pub fn render_config_info(path: &str, info: &ConfigInfo) -> String {
        let mut out = String::new();
        out.push_str("\n=== Feishu notification status ===\n");
        out.push_str(&format!("Config file: {}\n", path));
        out.push_str(&format!("Notifications: {}\n", if info.enabled { "enabled" } else { "disabled" }));
        out.push_str(&format!("Timeout: {}s\n", info.timeout_secs));
        out.push_str(&format!("Webhook count: {}\n", info.webhook_count));

        if !info.webhooks.is_empty() {
            out.push_str("\nWebhooks:\n");
            for (i, webhook) in info.webhooks.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, webhook));
            }
        }

        out
    }
}
