//! Greeks CLI - Finite Differences vs Dual Numbers
//!
//! Runs the step-size experiment comparing central-difference and
//! dual-number Greeks of a Black-Scholes call against their closed forms.
//!
//! # Commands
//!
//! - `greeks compare` - Run the sweep, write the table and plot it
//! - `greeks check` - Show configuration and environment
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration and logging around
//! `pricer_risk`, which drives `pricer_models` and `pricer_core`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_models::sensitivity::Greek;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::compare::CompareOptions;
use config::{CliConfig, SweepKind};

/// Finite-difference vs dual-number Greeks
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "greeks.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the step-size sweep and export the error table
    Compare {
        /// Output table file (default: <output_dir>/greeks.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Greek to plot (delta, vega, rho)
        #[arg(short, long)]
        greek: Option<Greek>,

        /// Write the table without plotting
        #[arg(long)]
        no_plot: bool,

        /// Evaluate steps on a thread pool
        #[arg(short, long)]
        parallel: bool,

        /// Step spacing
        #[arg(short, long, value_enum)]
        sweep: Option<SweepKind>,

        /// Number of steps
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Linear step increment
        #[arg(short, long)]
        increment: Option<f64>,

        /// Smallest step of a log sweep
        #[arg(long)]
        log_min: Option<f64>,

        /// Largest step of a log sweep
        #[arg(long)]
        log_max: Option<f64>,
    },

    /// Check configuration and environment
    Check,
}

/// Builds the log filter: `RUST_LOG` wins, then `--verbose`, then the config.
fn log_filter(verbose: bool, config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug"
        } else {
            config.general.log_level.as_str()
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_file(&cli.config)?;

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(log_filter(cli.verbose, &config))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Compare {
            output,
            greek,
            no_plot,
            parallel,
            sweep,
            steps,
            increment,
            log_min,
            log_max,
        } => commands::compare::run(
            config,
            &CompareOptions {
                output,
                greek,
                no_plot,
                parallel,
                sweep,
                steps,
                increment,
                log_min,
                log_max,
            },
        ),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
