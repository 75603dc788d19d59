use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw intervals, build the tree and walk through it interactively
    Repl {
        /// Seed for randomly generated intervals
        #[arg(long)]
        seed: Option<u64>,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Run the commands of a file, one per line
    Script {
        /// Path to the script
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Seed for randomly generated intervals
        #[arg(long)]
        seed: Option<u64>,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            | Commands::Repl { verbose, .. } | Commands::Script { verbose, .. } => *verbose,
        }
    }
    pub fn seed(&self) -> Option<u64> {
        match self {
            | Commands::Repl { seed, .. } | Commands::Script { seed, .. } => *seed,
        }
    }
}
