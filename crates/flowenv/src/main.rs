//! Flowenv command line
//!
//! Resolves execution environment settings from a TOML config file plus
//! command line overrides, and prints or validates them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use flowenv_logging::{init_logging, LogConfig};
use flowenv_settings::paths;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "flowenv", about = "Resolve and inspect execution environment settings")]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Config file to read (default: $FLOWENV_HOME/config.toml when present)
    #[arg(long, global = true, env = "FLOWENV_CONFIG")]
    config: Option<PathBuf>,

    /// Also write logs to $FLOWENV_HOME/logs
    #[arg(long, global = true)]
    log_to_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved settings
    Show(cli::show::ShowArgs),

    /// Validate a config file
    Check {
        /// TOML file to validate
        file: PathBuf,
    },

    /// Write the default settings to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show(args) => {
            let config = cli::resolve_configuration(cli.config.as_deref())?;
            cli::show::run(&args, &config)
        }
        Commands::Check { file } => cli::check::run(&file),
        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(paths::default_config_path);
            cli::init::run(&path, force)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = cli.log_to_file.then(paths::default_logs_dir);
    if let Err(err) = init_logging(LogConfig {
        app_name: "flowenv",
        verbose: cli.verbose,
        log_dir,
    }) {
        eprintln!("Warning: failed to initialize logging: {:#}", err);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
