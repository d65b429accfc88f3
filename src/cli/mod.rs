pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(command @ types::Commands::Fetch { .. }) => {
            commands::handle_fetch_command(command, cli.config.as_ref()).await;
        }
        Some(command @ types::Commands::Config {}) => {
            commands::handle_config_command(command, cli.config.as_ref()).await;
        }
        None => {
            log::error!("No command given. Try `wikitoc fetch --query <ARTICLE>`.");
        }
    }
}
