//! Climate Scenarios CLI - ASRS Climate Scenario Comparison
//!
//! This is the operational entry point for comparing NGFS climate scenarios
//! against an industry selection and optional sector exposure data.
//!
//! # Commands
//!
//! - `climate-scenarios scenarios` - List the scenario catalog
//! - `climate-scenarios defaults --industry <label>` - Show pre-selected scenarios
//! - `climate-scenarios analyze` - Compare scenarios (tables or JSON)
//! - `climate-scenarios export` - Write the comparison report (PDF, text, JSON)
//! - `climate-scenarios check` - Validate configuration and catalog
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration, the scenario
//! catalog, report assembly, and report sinks into one command-line tool.
//! Every invocation recomputes the report from its inputs.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::session::Context;
use commands::SelectionArgs;
use config::AppConfig;

/// ASRS Climate Scenario Analysis CLI
#[derive(Parser)]
#[command(name = "climate-scenarios")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults apply when the file is absent)
    #[arg(short, long, global = true, default_value = "climate_scenarios.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the scenario catalog
    Scenarios {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show the default scenarios for an industry
    Defaults {
        /// Industry sector
        #[arg(short, long)]
        industry: String,
    },

    /// Compare scenarios for an industry
    Analyze {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Export the scenario comparison report
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory (overrides the configured one)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Report format (pdf, text, json)
        #[arg(short, long, default_value = "pdf")]
        format: String,
    },

    /// Check configuration and scenario catalog
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_with_env_and_validate(Path::new(&cli.config))?;

    // Initialise tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config, ?config, "Configuration loaded");

    let ctx = Context::load(config)?;

    match cli.command {
        Commands::Scenarios { format } => commands::scenarios::run(&ctx, &format),
        Commands::Defaults { industry } => commands::defaults::run(&ctx, &industry),
        Commands::Analyze { selection, format } => {
            commands::analyze::run(&ctx, &selection, &format)
        }
        Commands::Export {
            selection,
            output_dir,
            format,
        } => commands::export::run(&ctx, &selection, output_dir.as_deref(), &format).map(|_| ()),
        Commands::Check => commands::check::run(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_repeated_scenarios() {
        let cli = Cli::try_parse_from([
            "climate-scenarios",
            "analyze",
            "--industry",
            "Energy",
            "--scenario",
            "Net Zero 2050",
            "--scenario",
            "Hot House World",
            "--exposure",
            "data/sample_exposure.csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { selection, format } => {
                assert_eq!(selection.industry, "Energy");
                assert_eq!(selection.scenarios, vec!["Net Zero 2050", "Hot House World"]);
                assert_eq!(
                    selection.exposure,
                    Some(PathBuf::from("data/sample_exposure.csv"))
                );
                assert_eq!(format, "table");
            }
            _ => panic!("Expected analyze command"),
        }
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from(["climate-scenarios", "export"]).unwrap();
        assert_eq!(cli.config, "climate_scenarios.toml");
        match cli.command {
            Commands::Export {
                selection,
                output_dir,
                format,
            } => {
                assert_eq!(selection.industry, commands::DEFAULT_INDUSTRY);
                assert!(selection.scenarios.is_empty());
                assert!(output_dir.is_none());
                assert_eq!(format, "pdf");
            }
            _ => panic!("Expected export command"),
        }
    }

    #[test]
    fn test_defaults_requires_industry() {
        assert!(Cli::try_parse_from(["climate-scenarios", "defaults"]).is_err());
    }
}
