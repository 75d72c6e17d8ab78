use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

use sevp_cli::cli_args::{Args, Commands};
use sevp_cli::commands;
use sevp_core::config::Config;
use sevp_core::error::{Error, Result};

/// Environment variable holding the log filter.
const LOG_LEVEL_ENV: &str = "SEVP_LOG_LEVEL";

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    match &args.command {
        Some(Commands::Init { shell }) => commands::init::run(shell),
        Some(Commands::List { quiet }) => {
            let config =
                Config::discover(args.config_path.as_deref())?.ok_or(Error::ConfigNotFound)?;
            commands::list::run(&config, *quiet)
        }
        Some(Commands::View { selector }) => {
            let config = Config::discover(args.config_path.as_deref())?;
            commands::view::run(selector, config.as_ref())
        }
        None => {
            let config = Config::discover(args.config_path.as_deref())?;
            commands::pick::run(args.selector.as_deref(), config.as_ref())
        }
    }
}

fn main() -> ExitCode {
    // Quiet by default so log output doesn't land on the picker screen
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV, "warn")).init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
