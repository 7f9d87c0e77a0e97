use clap::Subcommand;
use crate::enums::config_action::ConfigAction;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Send a message to every configured webhook
    Send {
        message: String,
        /// Render the message as Feishu markdown
        #[clap(short, long)]
        markdown: bool,
        /// Request timeout in seconds
        #[clap(short, long)]
        timeout: Option<u64>,
    },
    /// Show whether notifications are enabled and which webhooks are configured
    Status,
    /// Send a timestamped test message
    Test {
        #[clap(short, long)]
        timeout: Option<u64>,
    },
    /// Print version information
    Version,
    /// Inspect or create the configuration file
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },
}
