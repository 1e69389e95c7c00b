use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use liars_dice::cli::{self, Args};
use liars_dice::error::GameError;

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level())).init();

    match cli::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            match err.downcast_ref::<GameError>() {
                Some(GameError::InvalidConfiguration { .. }) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
