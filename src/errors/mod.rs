use thiserror::Error;

/// Broad category of a failure, used by the CLI to pick its wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    InvalidArgument,
    Notification,
    System,
}

#[derive(Debug, Clone, Error)]
pub enum FeishuError {
    // Configuration errors
    #[error("configuration file not found: {path}")]
    ConfigurationFileNotFound { path: String },

    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError { path: String, reason: String },

    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },

    #[error("invalid webhook URL: {url}")]
    InvalidWebhook { url: String },

    // Caller errors
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    // Delivery errors
    #[error("{}", delivery_summary(.succeeded, .total, .errors))]
    DeliveryFailed {
        succeeded: usize,
        total: usize,
        errors: Vec<String>,
    },

    // System errors
    #[error("system error during {operation}: {reason}")]
    SystemError { operation: String, reason: String },
}

fn delivery_summary(succeeded: &usize, total: &usize, errors: &[String]) -> String {
    let joined = errors.join("; ");
    if *succeeded == 0 {
        format!("all webhooks failed: {}", joined)
    } else {
        format!("partial delivery failure ({}/{} succeeded): {}", succeeded, total, joined)
    }
}

impl FeishuError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_argument(field: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigurationFileNotFound { .. }
            | Self::ConfigurationFileError { .. }
            | Self::ConfigurationError { .. }
            | Self::InvalidWebhook { .. } => ErrorKind::Config,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::DeliveryFailed { .. } => ErrorKind::Notification,
            Self::SystemError { .. } => ErrorKind::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::DeliveryFailed { succeeded: 0, .. } => ErrorSeverity::High,
            Self::DeliveryFailed { .. } => ErrorSeverity::Medium,
            Self::ConfigurationFileNotFound { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ConfigurationError { .. } | Self::InvalidWebhook { .. } => ErrorSeverity::Medium,
            Self::InvalidArgument { .. } => ErrorSeverity::Low,
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ConfigurationFileNotFound { .. } => {
                Some("Run 'feishu config init' to create a configuration file".to_string())
            }
            Self::ConfigurationFileError { .. } => Some("Check file permissions and TOML syntax".to_string()),
            Self::ConfigurationError { suggestion, .. } => suggestion.clone(),
            Self::InvalidWebhook { .. } => Some(
                "Webhooks must look like https://open.feishu.cn/open-apis/bot/v2/hook/<token>".to_string(),
            ),
            Self::DeliveryFailed { .. } => Some("Check your network connection and the bot webhooks".to_string()),
            Self::InvalidArgument { .. } | Self::SystemError { .. } => None,
        }
    }

    /// Label used as the prefix of the CLI error line.
    pub fn label(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Config => "Configuration error",
            ErrorKind::InvalidArgument => "Validation error",
            ErrorKind::Notification => "Send failed",
            ErrorKind::System => "Unexpected error",
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for feishu operations
pub type FeishuResult<T> = Result<T, FeishuError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &FeishuError) {
        let severity = error.severity();

        log::debug!("[{}] {:?}", severity.name(), error);
        eprintln!("{} {}: {}", severity.emoji(), error.label(), error);

        if let Some(suggestion) = error.suggestion() {
            eprintln!("💡 {}", suggestion);
        }
    }

    /// Exit code the CLI reports for a finished command.
    pub fn exit_code(result: &FeishuResult<()>) -> i32 {
        match result {
            Ok(()) => 0,
            Err(_) => 1,
        }
    }
}

impl From<std::io::Error> for FeishuError {
    fn from(error: std::io::Error) -> Self {
        FeishuError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_delivery_message_reports_counts() {
        let error = FeishuError::DeliveryFailed {
            succeeded: 1,
            total: 2,
            errors: vec!["webhook 2/2 failed: HTTP 400".to_string()],
        };

        let message = error.to_string();
        assert!(message.contains("1/2"));
        assert!(message.contains("webhook 2/2 failed"));
        assert_eq!(error.kind(), ErrorKind::Notification);
    }

    #[test]
    fn test_total_delivery_failure_message() {
        let error = FeishuError::DeliveryFailed {
            succeeded: 0,
            total: 2,
            errors: vec!["a".to_string(), "b".to_string()],
        };

        assert_eq!(error.to_string(), "all webhooks failed: a; b");
        assert_eq!(error.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_kinds_and_exit_codes() {
        assert_eq!(FeishuError::invalid_argument("text", "empty").kind(), ErrorKind::InvalidArgument);
        assert_eq!(FeishuError::InvalidWebhook { url: "x".into() }.kind(), ErrorKind::Config);
        assert_eq!(ErrorHandler::exit_code(&Ok(())), 0);
        assert_eq!(ErrorHandler::exit_code(&Err(FeishuError::system_error("io", "boom"))), 1);
    }
}
