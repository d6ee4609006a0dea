//! Check command implementation
//!
//! Prints build, configuration and environment information.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, config_path: &Path) -> Result<()> {
    println!("greeks {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Configuration");
    println!(
        "  File:        {} ({})",
        config_path.display(),
        if config_path.exists() { "found" } else { "defaults" }
    );
    println!("  Log level:   {}", config.general.log_level);
    println!("  Output dir:  {}", config.general.output_dir);

    let params = config.market_params()?;
    println!(
        "  Market:      S = {}, K = {}, r = {}, σ = {}",
        params.spot(),
        params.strike(),
        params.rate(),
        params.volatility()
    );
    println!("  Sweep:       {:?}", config.sweep());
    println!();

    println!("Parallelism");
    println!("  Logical CPUs:  {}", num_cpus::get());
    println!("  Physical CPUs: {}", num_cpus::get_physical());
    println!(
        "  Parallel sweep: {} ({} threads)",
        if config.parallel.enabled { "on" } else { "off" },
        config.parallel.num_threads
    );
    println!();

    println!("Plotting");
    println!("  Enabled:     {}", config.plot.enabled);
    println!("  Greek:       {}", config.plot.greek);
    println!(
        "  Interpreter: {} ({})",
        config.plot.interpreter,
        if interpreter_available(&config.plot.interpreter) {
            "available"
        } else {
            "not found"
        }
    );

    Ok(())
}

/// Whether `interpreter --version` runs successfully.
fn interpreter_available(interpreter: &str) -> bool {
    Command::new(interpreter)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
