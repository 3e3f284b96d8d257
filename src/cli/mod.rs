pub mod types;
pub mod commands;
pub mod logging;

use std::process::ExitCode;

use clap::Parser;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(logging::log_level(cli.debug, cli.quiet));
    logging::configure_backtrace(cli.trace);

    let command = cli.command.unwrap_or_else(types::Commands::default_build);

    let result = match &command {
        types::Commands::Build { .. } => {
            commands::handle_build_command(&command, cli.config.as_ref())
        },
        types::Commands::Anchor { .. } => {
            commands::handle_anchor_command(&command)
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
