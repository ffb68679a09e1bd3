//! Main entry point for the ue-sound-extract CLI

mod cli;
mod commands;
mod utils;

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG still overrides the verbosity flags
    let default_level = match (cli.verbose, cli.quiet) {
        (0, true) => "error",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Some(Commands::Extract(args)) => commands::extract::execute(args, cli.quiet),
        Some(Commands::Info(args)) => commands::info::execute(args),
        Some(Commands::Completions { shell }) => {
            print_completions(shell, &mut Cli::command());
            Ok(())
        }
        // Files dropped onto the executable arrive as bare arguments
        None if !cli.extract.files.is_empty() => commands::extract::execute(cli.extract, cli.quiet),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
