//! Root CLI structure for ue-sound-extract

use clap::{Parser, Subcommand};

use crate::commands::extract::ExtractArgs;

#[derive(Parser)]
#[command(name = "ue-sound-extract")]
#[command(about = "Extract weapon sound notify timings from exported animation JSON", long_about = None)]
#[command(version)]
#[command(author)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to execute; files given without one are extracted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Extraction of files dropped onto the executable
    #[command(flatten)]
    pub extract: ExtractArgs,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sound event CSV next to each JSON export
    Extract(ExtractArgs),

    /// Display sequence timing and resolved sound events of an export
    Info(crate::commands::info::InfoArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
