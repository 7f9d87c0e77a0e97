use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the loaded configuration with masked webhooks
    Show,
    /// Create a sample configuration in the user config directory
    Init {
        /// Overwrite an existing configuration file
        #[clap(long)]
        force: bool,
    },
    /// Print the resolved configuration file path
    Path,
}
