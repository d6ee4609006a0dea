//! Compare command implementation
//!
//! Runs the finite-difference vs dual-number sweep, writes the table and hands
//! it to the plotting process.

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use pricer_models::market::MarketParams;
use pricer_models::sensitivity::Greek;
use pricer_risk::comparison::{ComparisonHarness, ComparisonReport, StepSweep};
use pricer_risk::export::{write_table, PlotRenderer, PlotScript, PythonRenderer};
use tracing::{info, warn};

use crate::config::{CliConfig, SweepKind};
use crate::{CliError, Result};

/// Default table file name inside the output directory
pub const DEFAULT_TABLE_NAME: &str = "greeks.txt";

/// Command-line overrides for the compare command
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompareOptions {
    /// Table path
    pub output: Option<PathBuf>,
    /// Plotted Greek
    pub greek: Option<Greek>,
    /// Skip plotting
    pub no_plot: bool,
    /// Force the parallel sweep
    pub parallel: bool,
    /// Sweep spacing
    pub sweep: Option<SweepKind>,
    /// Number of steps
    pub steps: Option<usize>,
    /// Linear increment
    pub increment: Option<f64>,
    /// Smallest step of a log sweep
    pub log_min: Option<f64>,
    /// Largest step of a log sweep
    pub log_max: Option<f64>,
}

impl CompareOptions {
    /// Applies the overrides on top of the file configuration.
    fn apply(&self, config: &mut CliConfig) {
        if let Some(greek) = self.greek {
            config.plot.greek = greek;
        }
        if self.no_plot {
            config.plot.enabled = false;
        }
        if self.parallel {
            config.parallel.enabled = true;
        }
        if let Some(sweep) = self.sweep {
            config.experiment.sweep = sweep;
        }
        if let Some(steps) = self.steps {
            config.experiment.steps = steps;
        }
        if let Some(increment) = self.increment {
            config.experiment.increment = increment;
        }
        if let Some(log_min) = self.log_min {
            config.experiment.log_min = log_min;
        }
        if let Some(log_max) = self.log_max {
            config.experiment.log_max = log_max;
        }
    }

    fn table_path(&self, config: &CliConfig) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Path::new(&config.general.output_dir).join(DEFAULT_TABLE_NAME))
    }
}

/// Run the compare command
pub fn run(mut config: CliConfig, options: &CompareOptions) -> Result<()> {
    options.apply(&mut config);

    let params = config.market_params()?;
    let sweep = config.sweep();
    let path = options.table_path(&config);

    info!("Starting comparison...");
    info!(
        "  S = {}, K = {}, r = {}, σ = {}",
        params.spot(),
        params.strike(),
        params.rate(),
        params.volatility()
    );
    info!("  Sweep: {:?}", sweep);
    info!("  Output: {}", path.display());

    let report = run_sweep(&config, params, &sweep)?;
    if report.invalid_count() > 0 {
        warn!(
            "{} of {} records hit a domain fault and were written as NaN",
            report.invalid_count(),
            report.records().len()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_table(&report, &path)?;

    print!("{}", summary_table(&report)?);

    if config.plot.enabled {
        let renderer = PythonRenderer::new(config.plot.interpreter.clone());
        renderer.render(&PlotScript::new(&path, config.plot.greek))?;
    } else {
        info!("Plotting disabled");
    }

    info!("Comparison complete");
    Ok(())
}

/// Runs the sweep, on a dedicated rayon pool when parallel mode is on.
fn run_sweep(
    config: &CliConfig,
    params: MarketParams,
    sweep: &StepSweep,
) -> Result<ComparisonReport> {
    let harness = ComparisonHarness::new(params).with_parallel(config.parallel.enabled);

    if !config.parallel.enabled {
        return Ok(harness.run(sweep)?);
    }

    if config.parallel.num_threads == 0 {
        return Err(CliError::InvalidArgument(
            "parallel.num_threads must be at least 1".to_string(),
        ));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallel.num_threads)
        .build()
        .map_err(|e| CliError::ThreadPool(e.to_string()))?;
    info!("  Threads: {}", pool.current_num_threads());

    Ok(pool.install(|| harness.run(sweep))?)
}

/// Renders the reference Greeks and the best FD step per Greek.
pub fn summary_table(report: &ComparisonReport) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    let analytical = report.analytical();
    let dual = report.dual();

    writeln!(out, "\n┌───────┬────────────────────┬────────────────────┬───────────┬───────────┬───────────┐")?;
    writeln!(
        out,
        "│ Greek │ {:<18} │ {:<18} │ {:<9} │ {:<9} │ {:<9} │",
        "Analytical", "Dual", "AD error", "Best h", "FD error"
    )?;
    writeln!(out, "├───────┼────────────────────┼────────────────────┼───────────┼───────────┼───────────┤")?;

    for greek in Greek::ALL {
        let (best_h, best_err) = match report.min_fd_error(greek) {
            Some(record) => (
                format!("{:.3e}", record.step()),
                format!("{:.3e}", record.fd_error(greek)),
            ),
            None => ("-".to_string(), "-".to_string()),
        };

        writeln!(
            out,
            "│ {:<5} │ {:<18.15} │ {:<18.15} │ {:<9.3e} │ {:<9} │ {:<9} │",
            greek.label(),
            analytical.get(greek),
            dual.get(greek),
            (dual.get(greek) - analytical.get(greek)).abs(),
            best_h,
            best_err
        )?;
    }

    writeln!(out, "└───────┴────────────────────┴────────────────────┴───────────┴───────────┴───────────┘")?;
    writeln!(
        out,
        "{} records, {} invalid",
        report.records().len(),
        report.invalid_count()
    )?;
    Ok(out)
}
