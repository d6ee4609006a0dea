//! CLI configuration loading
//!
//! Loads the experiment configuration from a TOML file. Every section and key
//! is optional; the defaults reproduce the reference experiment.

use std::path::Path;

use clap::ValueEnum;
use pricer_models::market::MarketParams;
use pricer_models::sensitivity::Greek;
use pricer_risk::comparison::{StepSweep, REFERENCE_COUNT, REFERENCE_INCREMENT};
use pricer_risk::export::DEFAULT_INTERPRETER;
use serde::Deserialize;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// General settings
    pub general: GeneralConfig,

    /// Market inputs and step sweep
    pub experiment: ExperimentConfig,

    /// Plot settings
    pub plot: PlotConfig,

    /// Parallel sweep settings
    pub parallel: ParallelConfig,
}

/// General CLI settings
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: String,

    /// Output directory
    pub output_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

/// Spacing of the step sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SweepKind {
    /// h = i·increment
    #[default]
    Linear,
    /// Geometric spacing between `log_min` and `log_max`
    Log,
}

/// Experiment configuration
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Spot price
    pub spot: f64,

    /// Strike
    pub strike: f64,

    /// Risk-free rate
    pub rate: f64,

    /// Volatility
    pub volatility: f64,

    /// Sweep spacing
    pub sweep: SweepKind,

    /// Linear sweep increment
    pub increment: f64,

    /// Number of steps
    pub steps: usize,

    /// Smallest step of a log sweep
    pub log_min: f64,

    /// Largest step of a log sweep
    pub log_max: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        let reference = MarketParams::reference();
        Self {
            spot: reference.spot(),
            strike: reference.strike(),
            rate: reference.rate(),
            volatility: reference.volatility(),
            sweep: SweepKind::Linear,
            increment: REFERENCE_INCREMENT,
            steps: REFERENCE_COUNT,
            log_min: 1e-9,
            log_max: 1e-1,
        }
    }
}

/// Plot configuration
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Render the plot after the table is written
    pub enabled: bool,

    /// Python interpreter command
    pub interpreter: String,

    /// Greek whose error curves are plotted
    pub greek: Greek,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interpreter: DEFAULT_INTERPRETER.to_string(),
            greek: Greek::Rho,
        }
    }
}

/// Parallel sweep configuration
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallelConfig {
    /// Evaluate sweep steps on a rayon pool
    pub enabled: bool,

    /// Number of worker threads
    pub num_threads: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            num_threads: num_cpus::get(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the default configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Validated market parameters
    pub fn market_params(&self) -> Result<MarketParams> {
        let e = &self.experiment;
        Ok(MarketParams::new(e.spot, e.strike, e.rate, e.volatility)?)
    }

    /// The configured step sweep
    pub fn sweep(&self) -> StepSweep {
        let e = &self.experiment;
        match e.sweep {
            SweepKind::Linear => StepSweep::Linear {
                increment: e.increment,
                count: e.steps,
            },
            SweepKind::Log => StepSweep::Logarithmic {
                min: e.log_min,
                max: e.log_max,
                count: e.steps,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_experiment() {
        let config = CliConfig::default();
        assert_eq!(config.market_params().unwrap(), MarketParams::reference());
        assert_eq!(config.sweep(), StepSweep::reference());
        assert_eq!(config.general.log_level, "info");
        assert!(config.plot.enabled);
        assert_eq!(config.plot.greek, Greek::Rho);
        assert!(!config.parallel.enabled);
        assert!(config.parallel.num_threads >= 1);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::parse(
            r#"
            [experiment]
            volatility = 0.25
            sweep = "log"
            steps = 30

            [plot]
            greek = "delta"
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.experiment.volatility, 0.25);
        assert_eq!(config.experiment.spot, 80.0);
        assert_eq!(config.plot.greek, Greek::Delta);
        assert!(!config.plot.enabled);
        assert_eq!(config.plot.interpreter, "python3");
        assert_eq!(
            config.sweep(),
            StepSweep::Logarithmic {
                min: 1e-9,
                max: 1e-1,
                count: 30
            }
        );
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = CliConfig::parse("[experiment\nspot = ");
        assert!(matches!(result, Err(CliError::Parse(_))));
    }

    #[test]
    fn test_unknown_greek_is_parse_error() {
        let result = CliConfig::parse("[plot]\ngreek = \"gamma\"\n");
        assert!(matches!(result, Err(CliError::Parse(_))));
    }

    #[test]
    fn test_invalid_market_params() {
        let config = CliConfig::parse("[experiment]\nspot = -1.0\n").unwrap();
        assert!(matches!(config.market_params(), Err(CliError::Analytical(_))));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeks.toml");
        std::fs::write(&path, "[parallel]\nenabled = true\nnum_threads = 2\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert!(config.parallel.enabled);
        assert_eq!(config.parallel.num_threads, 2);
    }
}
