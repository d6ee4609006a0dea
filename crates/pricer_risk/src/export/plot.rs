//! Plotting collaborator.
//!
//! [`PlotScript`] renders a fixed matplotlib script that loads the exported
//! table and plots one Greek's FD and AD error curves against h.
//! [`PythonRenderer`] pipes the script into an external interpreter.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pricer_models::sensitivity::Greek;
use tracing::{debug, info};

use super::error::ExportError;
use crate::comparison::ComparisonRecord;

/// Default interpreter used by [`PythonRenderer`].
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Matplotlib script for one Greek.
///
/// # Examples
/// ```
/// use pricer_models::sensitivity::Greek;
/// use pricer_risk::export::PlotScript;
///
/// let script = PlotScript::new("greeks.txt", Greek::Rho).to_string();
/// assert!(script.contains("data = np.loadtxt('greeks.txt')"));
/// assert!(script.contains("plt.title('rho numerical calculation')"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotScript {
    table: PathBuf,
    greek: Greek,
}

impl PlotScript {
    /// Script plotting `greek` from the table at `table`.
    pub fn new<P: AsRef<Path>>(table: P, greek: Greek) -> Self {
        Self {
            table: table.as_ref().to_path_buf(),
            greek,
        }
    }

    /// The table the script loads.
    pub fn table(&self) -> &Path {
        &self.table
    }

    /// The plotted Greek.
    pub fn greek(&self) -> Greek {
        self.greek
    }
}

/// Single-quoted Python string literal.
fn py_str(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

impl fmt::Display for PlotScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fd, ad) = ComparisonRecord::column_indices(self.greek);
        let title = format!("{} numerical calculation", self.greek.label().to_lowercase());

        writeln!(f, "import numpy as np")?;
        writeln!(f, "import matplotlib.pyplot as plt")?;
        writeln!(f, "plt.style.use('ggplot')")?;
        writeln!(f, "data = np.loadtxt({})", py_str(&self.table.to_string_lossy()))?;
        writeln!(f, "x = data[:,0]")?;
        writeln!(f, "plt.plot(x, data[:,{}], label='by central diff')", fd)?;
        writeln!(f, "plt.plot(x, data[:,{}], label='by automatic diff')", ad)?;
        writeln!(f, "plt.xlabel('h:difference')")?;
        writeln!(f, "plt.ylabel('RMS')")?;
        writeln!(f, "plt.yscale('log')")?;
        writeln!(f, "plt.title({})", py_str(&title))?;
        writeln!(f, "plt.minorticks_on()")?;
        writeln!(f, "plt.legend()")?;
        writeln!(f, "plt.show()")
    }
}

/// Consumer of a plotting script.
pub trait PlotRenderer {
    /// Renders the plot.
    ///
    /// # Errors
    /// `ExportError::Renderer` if rendering fails.
    fn render(&self, script: &PlotScript) -> Result<(), ExportError>;
}

/// Pipes the script into a Python interpreter's stdin and waits for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonRenderer {
    interpreter: String,
}

impl PythonRenderer {
    /// Renderer using the given interpreter command.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// The interpreter command.
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }
}

impl Default for PythonRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl PlotRenderer for PythonRenderer {
    fn render(&self, script: &PlotScript) -> Result<(), ExportError> {
        debug!(interpreter = %self.interpreter, greek = %script.greek(), "starting plot process");

        let mut child = Command::new(&self.interpreter)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| ExportError::Renderer(format!("failed to start {}: {}", self.interpreter, e)))?;

        // stdin is dropped at the end of this block so the interpreter sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(script.to_string().as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|e| ExportError::Renderer(format!("failed to wait for {}: {}", self.interpreter, e)))?;

        written.map_err(|e| ExportError::Renderer(format!("failed to send script: {}", e)))?;

        if !status.success() {
            return Err(ExportError::Renderer(format!(
                "{} exited with {}",
                self.interpreter, status
            )));
        }

        info!(greek = %script.greek(), "plot rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_labels() {
        let script = PlotScript::new("out/test.txt", Greek::Vega).to_string();

        assert!(script.contains("plt.style.use('ggplot')"));
        assert!(script.contains("plt.xlabel('h:difference')"));
        assert!(script.contains("plt.ylabel('RMS')"));
        assert!(script.contains("plt.yscale('log')"));
        assert!(script.contains("label='by central diff'"));
        assert!(script.contains("label='by automatic diff'"));
        assert!(script.contains("plt.title('vega numerical calculation')"));
        assert!(script.ends_with("plt.show()\n"));
    }

    #[test]
    fn test_script_columns_per_greek() {
        for (greek, fd, ad) in [(Greek::Delta, 1, 2), (Greek::Vega, 3, 4), (Greek::Rho, 5, 6)] {
            let script = PlotScript::new("t.txt", greek).to_string();
            assert!(script.contains(&format!("plt.plot(x, data[:,{}], label='by central diff')", fd)));
            assert!(script.contains(&format!("plt.plot(x, data[:,{}], label='by automatic diff')", ad)));
        }
    }

    #[test]
    fn test_path_is_quoted() {
        let script = PlotScript::new("it's\\here.txt", Greek::Delta).to_string();
        assert!(script.contains(r"np.loadtxt('it\'s\\here.txt')"));
    }

    #[test]
    fn test_missing_interpreter_is_renderer_error() {
        let renderer = PythonRenderer::new("definitely-not-an-interpreter-4b1c");
        let result = renderer.render(&PlotScript::new("t.txt", Greek::Delta));
        assert!(matches!(result, Err(ExportError::Renderer(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_process() {
        // `cat` drains stdin and exits 0
        let renderer = PythonRenderer::new("cat");
        assert!(renderer.render(&PlotScript::new("t.txt", Greek::Delta)).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_process_is_renderer_error() {
        let renderer = PythonRenderer::new("false");
        let result = renderer.render(&PlotScript::new("t.txt", Greek::Delta));
        assert!(matches!(result, Err(ExportError::Renderer(_))));
    }
}
