use clap::Parser;
use smallfeishu::errors::ErrorHandler;
use smallfeishu::logger::init_logging;
use smallfeishu::structs::cli::Cli;
use smallfeishu::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = CommandRunner::new(cli.config).run_command(cli.command).await;
    if let Err(e) = &result {
        ErrorHandler::handle_error(e);
    }

    std::process::exit(ErrorHandler::exit_code(&result));
}
