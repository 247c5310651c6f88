//! memberdir - maintenance CLI for the member directory site
//!
//! Two standalone utilities over the same uploads folder: `check` reports
//! which members have no uploaded photo, `sync` rewrites the roster data
//! file's photo references to match the uploaded files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
mod roster;

#[derive(Parser, Debug)]
#[command(name = "memberdir", about = "Maintenance tools for the member directory site")]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report which members have no uploaded photo
    Check {
        /// Photo uploads directory (default: <root>/public/members)
        #[arg(long)]
        photos: Option<PathBuf>,

        /// Roster data file (default: <root>/lib/members-data.ts)
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite roster photo references to match uploaded files
    Sync {
        /// Photo uploads directory (default: <root>/public/members)
        #[arg(long)]
        photos: Option<PathBuf>,

        /// Roster data file (default: <root>/lib/members-data.ts)
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Preview changes without writing the data file
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::Check { json, .. } => *json,
        Commands::Sync { json, .. } => *json,
        Commands::Config { json } => *json,
    }
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            photos,
            data_file,
            json,
        } => cli::check::run(cli::check::CheckArgs {
            photos: photos.unwrap_or_else(cli::config::photos_dir),
            data_file: data_file.unwrap_or_else(cli::config::data_file),
            json,
        }),

        Commands::Sync {
            photos,
            data_file,
            dry_run,
            json,
        } => cli::sync::run(cli::sync::SyncArgs {
            photos: photos.unwrap_or_else(cli::config::photos_dir),
            data_file: data_file.unwrap_or_else(cli::config::data_file),
            dry_run,
            json,
        }),

        Commands::Config { json } => cli::config::run(cli::config::ConfigArgs { json }),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = command_wants_json(&cli.command);

    // Diagnostics go to stderr in JSON mode so stdout stays parseable
    let default_filter = if cli.verbose {
        "memberdir=debug"
    } else {
        "memberdir=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    let writer = if json_mode {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr)
    } else {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stdout)
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .init();

    let result = run_command(cli);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{}", err);
            }
            let code = err
                .downcast_ref::<cli::error::HelpfulError>()
                .map(|helpful| helpful.exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
