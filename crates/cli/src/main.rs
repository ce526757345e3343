//! # Title Warden CLI
//!
//! Command-line interface for validating pull request titles against configured
//! rules.
//!
//! The binary is designed to run as a GitHub Action step, where rule inputs
//! arrive as `INPUT_*` environment variables, and can also validate a title
//! locally.
//!
//! # Commands
//!
//! - `action` - Fetch the triggering pull request and validate its title
//! - `check` - Validate a title given on the command line
//!
//! # Examples
//!
//! ```bash
//! # Inside a workflow step
//! title-warden action
//!
//! # Locally
//! title-warden check "[JIRA-123] Fix bug" --regex '^\[JIRA-\d+\]' --min-length 5
//! ```

use std::process::{ExitCode, Termination};

use clap::{Parser, Subcommand};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command implementations for the CLI.
mod commands;

/// Error types specific to the CLI.
mod errors;

/// Rule inputs shared by the commands.
mod inputs;

/// Workflow command output.
mod reporting;

use commands::{action::ActionArgs, check::CheckArgs};

/// Command-line interface structure for Title Warden.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the Title Warden CLI.
#[derive(Subcommand)]
enum Commands {
    /// Validate the title of the pull request that triggered the workflow
    Action(ActionArgs),

    /// Validate a title given on the command line
    Check(CheckArgs),
}

/// Sets up logging on stderr so stdout stays free for workflow commands.
///
/// The level defaults to `info` (`debug` with `--verbose`) and can be
/// overridden with the `TITLE_WARDEN_LOG` environment variable.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("TITLE_WARDEN_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main entry point for the Title Warden CLI.
///
/// Exit codes follow [`errors::CliError`]: 0 when the title is valid, 1 when
/// it is rejected, and higher values when the check itself could not run.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Action(args) => match commands::action::execute(args).await {
            Ok(()) => {
                info!("Pull request title passed all checks");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Error validating pull request title: {}", e);
                reporting::set_failed(&e.failure_message());
                e.report()
            }
        },
        Commands::Check(args) => match commands::check::execute(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                if !matches!(e, errors::CliError::ValidationFailed(_)) {
                    eprintln!("{}", e);
                }
                e.report()
            }
        },
    }
}
