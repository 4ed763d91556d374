//! CLI for handing in exercises to the test server.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use handin_core::config::{self, HandinConfig};
use std::path::PathBuf;

use commands::{run_completions, run_exercises, run_files, run_logout, run_submit};

/// Top-level CLI for handin.
#[derive(Debug, Parser)]
#[command(name = "handin")]
#[command(about = "Hand in exercises to the test server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload the source files of an exercise for grading.
    Submit {
        /// Exercise key (e.g. dc1, dt-2, musician).
        exercise: String,
        /// Folder holding the source files and cached credential (default: current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Check which files an exercise needs, without uploading anything.
    Files {
        /// Exercise key.
        exercise: String,
        /// Folder to check (default: current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// List all known exercise keys.
    Exercises,

    /// Forget the cached auID and upload code.
    Logout {
        /// Folder holding the cached credential (default: current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn work_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(d) => Ok(d),
        None => Ok(std::env::current_dir()?),
    }
}

fn load_config() -> Result<HandinConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Submit { exercise, dir } => {
                run_submit(&load_config()?, &work_dir(dir)?, &exercise)?
            }
            CliCommand::Files { exercise, dir } => {
                run_files(&load_config()?, &work_dir(dir)?, &exercise)?
            }
            CliCommand::Exercises => run_exercises()?,
            CliCommand::Logout { dir } => run_logout(&load_config()?, &work_dir(dir)?)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
