//! dbml_builder CLI - keep generated Pydantic and SQLAlchemy models in step with DBML

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use dbml_builder::utils::init_logging;
use dbml_builder::{config, Config, DbmlBuilder, SyncOutcome};

#[derive(Debug, Parser)]
#[command(name = "dbml_builder")]
#[command(author, version, about = "Generate and verify models from DBML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging and show code generator output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the version stored in the DBML project note
    Version {
        /// DBML schema file
        schema: PathBuf,
    },

    /// Check generated models; exits with status 1 when they are stale
    Verify {
        /// DBML schema file
        schema: PathBuf,
        /// Directory holding the generated models
        output: PathBuf,
    },

    /// Regenerate models unconditionally
    Generate {
        /// DBML schema file
        schema: PathBuf,
        /// Directory to write the generated models to
        output: PathBuf,
    },

    /// Regenerate models only when they are stale
    Sync {
        /// DBML schema file
        schema: PathBuf,
        /// Directory holding the generated models
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    config.generator.show_diagnostics |= cli.verbose;

    init_logging(config.logging.as_ref(), cli.verbose).context("Failed to initialize logging")?;

    let builder = DbmlBuilder::new(config)?;

    match cli.command {
        Command::Version { schema } => {
            let version = builder
                .version(&schema)
                .with_context(|| format!("Failed to read version from {}", schema.display()))?;
            println!("{}", version);
        }
        Command::Verify { schema, output } => {
            let status = builder
                .status(&schema, &output)
                .with_context(|| format!("Failed to verify {}", output.display()))?;
            println!("{}", status);
            if !status.is_in_sync() {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Generate { schema, output } => {
            let metadata = builder
                .generate(&schema, &output)
                .with_context(|| format!("Failed to generate models into {}", output.display()))?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Command::Sync { schema, output } => {
            match builder
                .sync(&schema, &output)
                .with_context(|| format!("Failed to sync {}", output.display()))?
            {
                SyncOutcome::UpToDate => println!("in sync"),
                SyncOutcome::Regenerated { reason, metadata } => {
                    println!("regenerated ({}), version {}", reason, metadata.version)
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
